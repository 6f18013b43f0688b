pub mod class_names;
pub mod components;
pub mod i18n;
pub mod icons;
pub mod route;
