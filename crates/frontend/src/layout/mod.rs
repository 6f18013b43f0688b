pub mod left;

use leptos::prelude::*;

/// Application shell: sidebar on the left, routed content on the right.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <aside data-zone="left" class="app-sidebar">
                    {left()}
                </aside>
                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
