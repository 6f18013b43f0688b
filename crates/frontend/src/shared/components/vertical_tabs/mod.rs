//! Vertical tab navigation for settings-style sidebars
//!
//! - `item` - one tab and its nested children (`VerticalTabItem`)
//! - `list` - `<nav>` container for a list of tabs (`VerticalTabs`)

pub mod item;
pub mod list;

pub use item::VerticalTabItem;
pub use list::VerticalTabs;
