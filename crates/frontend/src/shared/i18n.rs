//! Translation dictionary provided to components through context.

use anyhow::Context;
use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

const EN_JSON: &str = include_str!("../../assets/locales/en.json");

/// Flat `key -> text` dictionary. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct Locale {
    messages: Arc<HashMap<String, String>>,
}

impl Locale {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let messages: HashMap<String, String> =
            serde_json::from_str(json).context("failed to parse locale dictionary")?;
        Ok(Self {
            messages: Arc::new(messages),
        })
    }

    /// Built-in English dictionary; an empty one if the bundled file is broken.
    pub fn english() -> Self {
        Self::from_json(EN_JSON).unwrap_or_else(|e| {
            log::error!("{:#}", e);
            Self::default()
        })
    }

    pub fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Locale from context, or an empty dictionary when none was provided.
pub fn use_locale() -> Locale {
    use_context::<Locale>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let locale = Locale::from_json(r#"{"profile": "Profile", "billing": "Billing"}"#).unwrap();
        assert_eq!(locale.t("profile"), "Profile");
        assert_eq!(locale.t("billing"), "Billing");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(Locale::default().t("new_team"), "new_team");
    }

    #[test]
    fn test_invalid_json() {
        assert!(Locale::from_json("[1, 2]").is_err());
        assert!(Locale::from_json(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn test_bundled_english() {
        let locale = Locale::english();
        assert_eq!(locale.t("billing_description"), "Manage billing and invoices");
        assert_eq!(locale.t("my_account"), "My Account");
    }
}
