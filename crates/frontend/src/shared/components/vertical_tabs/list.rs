use super::item::VerticalTabItem;
use crate::shared::class_names::class_names;
use contracts::navigation::TabDescriptor;
use leptos::prelude::*;

/// `<nav>` with one `VerticalTabItem` per descriptor, all sharing the same route
#[component]
pub fn VerticalTabs(
    tabs: Vec<TabDescriptor>,
    #[prop(into)]
    current_path: Signal<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    log::debug!("rendering {} vertical tabs", tabs.len());

    view! {
        <nav
            class=move || class_names([Some("flex flex-col space-y-0.5"), class.get().as_deref()])
            aria-label="Tabs"
        >
            {tabs
                .into_iter()
                .map(|tab| view! { <VerticalTabItem tab=tab current_path=current_path /> })
                .collect_view()}
        </nav>
    }
}
