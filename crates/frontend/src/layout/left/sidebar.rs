//! Settings sidebar built from the bundled navigation tree

use crate::shared::components::vertical_tabs::VerticalTabs;
use crate::shared::route::use_current_path;
use contracts::navigation::TabDescriptor;
use leptos::prelude::*;

const NAVIGATION_JSON: &str = include_str!("../../../assets/navigation.json");

fn load_navigation() -> Vec<TabDescriptor> {
    TabDescriptor::list_from_json(NAVIGATION_JSON).unwrap_or_else(|e| {
        log::error!("{:#}", e);
        vec![]
    })
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let current_path = use_current_path();

    view! {
        <div class="app-sidebar__content">
            <VerticalTabs tabs=load_navigation() current_path=current_path />
        </div>
    }
}
