//! `[theme]` and `[footer]` section configuration.

use super::defaults;
use crate::theme::ThemePreference;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[theme]` section in koumo.toml.
///
/// # Example
/// ```toml
/// [theme]
/// default = "system"    # light | dark | system
/// storage_key = "theme" # localStorage key used by the page script
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Preference used when the visitor has not chosen one yet.
    #[serde(default = "defaults::theme::default")]
    #[educe(Default = defaults::theme::default())]
    pub default: ThemePreference,

    #[serde(default = "defaults::theme::storage_key")]
    #[educe(Default = defaults::theme::storage_key())]
    pub storage_key: String,
}

/// `[footer]` section in koumo.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// Name shown in the footer; falls back to `[base] author`.
    pub name: Option<String>,

    /// Short badge next to the name (e.g. a flag emoji).
    pub badge: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use crate::theme::ThemePreference;

    #[test]
    fn test_theme_defaults() {
        let config: SiteConfig = toml::from_str("[base]\ntitle = \"Test\"").unwrap();

        assert_eq!(config.theme.default, ThemePreference::System);
        assert_eq!(config.theme.storage_key, "theme");
        assert!(config.footer.name.is_none());
    }

    #[test]
    fn test_theme_custom_value_kept() {
        let config = r#"
            [base]
            title = "Test"
            [theme]
            default = "sepia"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.theme.default, ThemePreference::Custom("sepia".into()));
    }

    #[test]
    fn test_footer() {
        let config = r#"
            [base]
            title = "Test"
            [footer]
            name = "Mohamed Kouache"
            badge = "🇲🇦"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.footer.name.as_deref(), Some("Mohamed Kouache"));
        assert_eq!(config.footer.badge.as_deref(), Some("🇲🇦"));
    }
}
