//! Разрешение дерева `TabDescriptor` в плоский список строк для текущего пути.
//!
//! Строка и её дети выводятся соседями, поэтому результат - плоский
//! список в порядке обхода (родитель, затем дети по порядку).

use super::descriptor::{LinkProps, LinkTarget, TabDescriptor};

/// Готовое к отрисовке состояние одной строки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRow {
    pub name: String,
    pub href: String,
    pub info: Option<String>,
    pub icon: Option<String>,
    pub target: LinkTarget,
    pub active: bool,
    pub disabled: bool,
    pub is_child: bool,
    /// Отступ без колонки под иконку: дочерняя строка или нет иконки
    pub indented: bool,
    /// Высокая строка, когда есть вторая строка текста
    pub tall: bool,
    pub show_external_glyph: bool,
    pub show_chevron: bool,
    pub text_class_names: Option<String>,
    pub class_name: Option<String>,
    pub link_props: LinkProps,
    pub depth: usize,
}

impl TabRow {
    pub fn test_id(&self) -> String {
        format!("vertical-tab-{}", self.name)
    }

    /// Иконка рисуется только когда она задана
    pub fn show_icon(&self) -> bool {
        self.icon.is_some()
    }
}

/// Состояние одной строки без учёта детей. `None` для скрытого пункта.
pub fn resolve_row(
    tab: &TabDescriptor,
    current_path: &str,
    is_child: bool,
    depth: usize,
) -> Option<TabRow> {
    if tab.hidden {
        return None;
    }

    let active = tab.is_current(current_path);
    // пустая строка считается отсутствующей
    let info = tab.info.clone().filter(|info| !info.is_empty());

    Some(TabRow {
        name: tab.name.clone(),
        href: tab.href.clone(),
        tall: info.is_some(),
        info,
        icon: tab.icon.clone(),
        target: tab.target(),
        active,
        disabled: tab.disabled,
        is_child,
        indented: is_child || tab.icon.is_none(),
        show_external_glyph: tab.is_external_link,
        show_chevron: active && !tab.disable_chevron,
        text_class_names: tab.text_class_names.clone(),
        class_name: tab.class_name.clone(),
        link_props: tab.link_props.clone(),
        depth,
    })
}

/// Все видимые строки пункта и его потомков.
///
/// Дети скрытого пункта не выводятся. У детей `is_child` всегда `true`,
/// независимо от их собственного значения.
pub fn resolve_rows(tab: &TabDescriptor, current_path: &str) -> Vec<TabRow> {
    let mut rows = Vec::new();
    let mut stack: Vec<(&TabDescriptor, bool, usize)> = vec![(tab, tab.is_child, 0)];

    while let Some((tab, is_child, depth)) = stack.pop() {
        let Some(row) = resolve_row(tab, current_path, is_child, depth) else {
            continue;
        };
        rows.push(row);
        for child in tab.children.iter().rev() {
            stack.push((child, true, depth + 1));
        }
    }

    rows
}
