pub mod vertical_tabs;
