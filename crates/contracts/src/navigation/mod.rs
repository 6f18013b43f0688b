//! Навигация боковой панели
//!
//! Содержит:
//! - `descriptor` - описание пункта меню (то, что передаёт вызывающий код)
//! - `row` - разрешённое состояние строки для текущего пути

pub mod descriptor;
pub mod row;

pub use descriptor::{LinkProps, LinkTarget, TabDescriptor};
pub use row::{resolve_row, resolve_rows, TabRow};
