use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::i18n::Locale;
use crate::shared::route::use_current_path;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
fn CurrentPage() -> impl IntoView {
    let current_path = use_current_path();

    view! {
        <p class="text-sm text-gray-500">{move || current_path.get()}</p>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the translation dictionary to the whole app via context.
    provide_context(Locale::english());

    view! {
        <Router>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <CurrentPage /> }.into_any()
            />
        </Router>
    }
}
