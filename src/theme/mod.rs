//! Theme preference and the dark-mode switch.
//!
//! ```text
//! ThemeStore (one per build) ──subscribe──► ThemeSwitch ──is_selected()──► sun / moon
//!      ▲                                        │
//!      └──────────────── set() ◄──── toggle() ──┘
//! ```
//!
//! The store is passed explicitly to whoever needs it. All writes go
//! through [`ThemeStore::set`], which notifies subscribers on change.

mod store;
mod switch;

pub use store::{SubscriptionId, ThemeStore};
pub use switch::ThemeSwitch;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of the ambient theme signal.
///
/// Unknown names are kept verbatim in `Custom` so they survive a
/// round-trip through config and the page script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "CompactString", into = "CompactString")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the host's `prefers-color-scheme`.
    System,
    Custom(CompactString),
}

impl ThemePreference {
    /// Toggle-widget state: selected (sun) only for exactly `light`.
    #[inline]
    pub const fn is_light(&self) -> bool {
        matches!(self, Self::Light)
    }

    /// Preference after one toggle. Anything but `light` becomes `light`,
    /// so toggling from `system` always lands on `light`.
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
            Self::Custom(name) => name,
        }
    }

    /// Class to put on `<html>` at build time; `system` is resolved by the page script.
    pub fn html_class(&self) -> Option<&str> {
        match self {
            Self::System => None,
            other => Some(other.as_str()),
        }
    }
}

impl From<&str> for ThemePreference {
    fn from(value: &str) -> Self {
        match value {
            "light" => Self::Light,
            "dark" => Self::Dark,
            "system" => Self::System,
            other => Self::Custom(other.into()),
        }
    }
}

impl From<CompactString> for ThemePreference {
    fn from(value: CompactString) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ThemePreference> for CompactString {
    fn from(value: ThemePreference) -> Self {
        match value {
            ThemePreference::Custom(name) => name,
            other => other.as_str().into(),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(ThemePreference::from("light"), ThemePreference::Light);
        assert_eq!(ThemePreference::from("dark"), ThemePreference::Dark);
        assert_eq!(ThemePreference::from("system"), ThemePreference::System);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            ThemePreference::from("Light"),
            ThemePreference::Custom("Light".into())
        );
        assert!(!ThemePreference::from("Light").is_light());
    }

    #[test]
    fn test_is_light_only_for_light() {
        assert!(ThemePreference::Light.is_light());
        for pref in [
            ThemePreference::Dark,
            ThemePreference::System,
            ThemePreference::Custom("sepia".into()),
            ThemePreference::Custom("".into()),
        ] {
            assert!(!pref.is_light(), "{pref} must not select the switch");
        }
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::System.toggled(), ThemePreference::Light);
        assert_eq!(
            ThemePreference::Custom("sepia".into()).toggled(),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_html_class() {
        assert_eq!(ThemePreference::Dark.html_class(), Some("dark"));
        assert_eq!(ThemePreference::System.html_class(), None);
        assert_eq!(
            ThemePreference::Custom("sepia".into()).html_class(),
            Some("sepia")
        );
    }

    #[test]
    fn test_serde_as_plain_string() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            theme: ThemePreference,
        }

        let parsed: Wrapper = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(parsed.theme, ThemePreference::Dark);

        let out = toml::to_string(&Wrapper {
            theme: ThemePreference::Custom("sepia".into()),
        })
        .unwrap();
        assert_eq!(out.trim(), "theme = \"sepia\"");
    }
}
