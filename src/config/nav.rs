//! `[nav]` section configuration.
//!
//! Brand mark and the ordered row of external profile links.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[nav]` section in koumo.toml.
///
/// # Example
/// ```toml
/// [nav.brand]
/// logo = "/assets/images/koumo-logo.png"
///
/// [[nav.links]]
/// platform = "github"
/// url = "https://github.com/koumo"
///
/// [[nav.links]]
/// platform = "linkedin"
/// url = ""        # rendered as an inert link
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    pub brand: BrandConfig,

    /// Profile links, rendered in declaration order.
    pub links: Vec<NavLink>,
}

/// `[nav.brand]` - the brand mark shown in both layouts.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BrandConfig {
    /// Logo image URL.
    #[serde(default = "defaults::nav::logo")]
    #[educe(Default = defaults::nav::logo())]
    pub logo: String,

    /// Logo alt text.
    #[serde(default = "defaults::nav::alt")]
    #[educe(Default = defaults::nav::alt())]
    pub alt: String,

    /// Target of the brand link in the wide layout.
    #[serde(default = "defaults::nav::href")]
    #[educe(Default = defaults::nav::href())]
    pub href: String,
}

/// One `[[nav.links]]` entry.
///
/// The URL is not validated; an empty one yields an inert link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub platform: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::NavLink;

    #[test]
    fn test_nav_defaults() {
        let config: SiteConfig = toml::from_str("[base]\ntitle = \"Test\"").unwrap();

        assert_eq!(config.nav.brand.logo, "/assets/images/logo.png");
        assert_eq!(config.nav.brand.alt, "website brand logo");
        assert_eq!(config.nav.brand.href, "/");
        assert!(config.nav.links.is_empty());
    }

    #[test]
    fn test_nav_links_keep_order() {
        let config = r#"
            [base]
            title = "Test"

            [[nav.links]]
            platform = "twitter"
            url = "https://twitter.com/k"

            [[nav.links]]
            platform = "github"
            url = "https://github.com/k"

            [[nav.links]]
            platform = "linkedin"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let platforms: Vec<_> = config.nav.links.iter().map(|l| l.platform.as_str()).collect();
        assert_eq!(platforms, ["twitter", "github", "linkedin"]);
        assert_eq!(
            config.nav.links[2],
            NavLink {
                platform: "linkedin".into(),
                url: String::new()
            }
        );
    }

    #[test]
    fn test_link_without_platform_rejected() {
        let config = r#"
            [base]
            title = "Test"

            [[nav.links]]
            url = "https://github.com/k"
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
