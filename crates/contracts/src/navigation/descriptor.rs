use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Дополнительные атрибуты ссылки, передаются в `<a>` как есть
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkProps {
    pub rel: Option<String>,
    pub title: Option<String>,
    pub download: bool,
}

/// Куда открывать ссылку
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    SelfTab,
    Blank,
}

impl LinkTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::SelfTab => "_self",
            LinkTarget::Blank => "_blank",
        }
    }
}

/// Описание одного пункта вертикальной навигации.
///
/// `name` и `info` - ключи перевода, а не готовый текст.
/// Все поля кроме `name` и `href` необязательные: отсутствие
/// просто скрывает соответствующий элемент строки.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDescriptor {
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub is_external_link: bool,
    #[serde(default)]
    pub disable_chevron: bool,
    /// Выставляется при рекурсии, значение из входных данных игнорируется для детей
    #[serde(default)]
    pub is_child: bool,
    #[serde(default)]
    pub children: Vec<TabDescriptor>,
    #[serde(default)]
    pub text_class_names: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub link_props: LinkProps,
}

impl TabDescriptor {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            ..Default::default()
        }
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn external(mut self) -> Self {
        self.is_external_link = true;
        self
    }

    pub fn without_chevron(mut self) -> Self {
        self.disable_chevron = true;
        self
    }

    pub fn with_children(mut self, children: Vec<TabDescriptor>) -> Self {
        self.children = children;
        self
    }

    pub fn with_text_class_names(mut self, classes: impl Into<String>) -> Self {
        self.text_class_names = Some(classes.into());
        self
    }

    pub fn with_class_name(mut self, classes: impl Into<String>) -> Self {
        self.class_name = Some(classes.into());
        self
    }

    pub fn with_link_props(mut self, link_props: LinkProps) -> Self {
        self.link_props = link_props;
        self
    }

    pub fn target(&self) -> LinkTarget {
        if self.is_external_link {
            LinkTarget::Blank
        } else {
            LinkTarget::SelfTab
        }
    }

    /// Сравнение по префиксу: `/settings` активен и для `/settings/profile`
    pub fn is_current(&self, current_path: &str) -> bool {
        current_path.starts_with(self.href.as_str())
    }

    /// Загрузка списка пунктов из JSON (массив объектов в camelCase)
    pub fn list_from_json(json: &str) -> anyhow::Result<Vec<TabDescriptor>> {
        serde_json::from_str(json).context("failed to parse navigation tabs")
    }
}
