//! Library-wide settings shared by every component through Leptos context.

use leptos::{provide_context, use_context};
use serde::{Deserialize, Serialize};

/// Class prefix used when no [`UiSettings`] are provided.
pub const DEFAULT_PREFIX: &str = "bx";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Host-level configuration for the component library.
pub struct UiSettings {
    /// Prefix prepended to every generated class token (`{prefix}--accordion`).
    pub prefix: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl UiSettings {
    /// Builds settings with a custom class prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns `{prefix}--{block}`.
    pub fn class(&self, block: &str) -> String {
        format!("{}--{block}", self.prefix)
    }
}

/// Makes `settings` available to every component rendered below the current owner.
pub fn provide_ui_settings(settings: UiSettings) {
    provide_context(settings);
}

/// Returns the nearest provided [`UiSettings`], or the defaults when none were provided.
pub fn use_ui_settings() -> UiSettings {
    use_context::<UiSettings>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_prefix_builds_block_classes() {
        assert_eq!(UiSettings::default().class("skeleton__text"), "bx--skeleton__text");
    }

    #[test]
    fn settings_load_from_partial_json() {
        let empty: UiSettings = serde_json::from_str("{}").expect("empty settings");
        assert_eq!(empty, UiSettings::default());

        let custom: UiSettings =
            serde_json::from_str(r#"{ "prefix": "cds" }"#).expect("custom settings");
        assert_eq!(custom.class("accordion"), "cds--accordion");
    }
}
