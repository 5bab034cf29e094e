//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn email() -> String {
        "user@noreply.koumo".into()
    }

    pub fn language() -> String {
        "en-US".into()
    }

    pub fn description() -> String {
        "Welcome to my website, your go-to destination for insightful articles on programming and coding!".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "_posts".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn assets() -> PathBuf {
        "assets".into()
    }

    pub mod rss {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "feed.xml".into()
        }
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        5277
    }
}

// ============================================================================
// [nav] Section Defaults
// ============================================================================

pub mod nav {
    pub fn logo() -> String {
        "/assets/images/logo.png".into()
    }

    pub fn alt() -> String {
        "website brand logo".into()
    }

    pub fn href() -> String {
        "/".into()
    }
}

// ============================================================================
// [theme] Section Defaults
// ============================================================================

pub mod theme {
    use crate::theme::ThemePreference;

    pub fn default() -> ThemePreference {
        ThemePreference::System
    }

    pub fn storage_key() -> String {
        "theme".into()
    }
}
