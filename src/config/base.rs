//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in koumo.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Koumo"
/// author = "Mohamed Kouache"
/// url = "https://koumo.dev"
/// og_image = "/assets/images/og.png"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site (CMS) name, used in `"{title} Blog."` page titles.
    pub title: String,

    /// Author name for rss feed and meta tags.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Author email for rss feed.
    #[serde(default = "defaults::base::email")]
    #[educe(Default = defaults::base::email())]
    pub email: String,

    /// Site description for `og:description`.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// Base URL for absolute links in the rss feed.
    /// Required when `[build.rss].enable = true`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Home page `og:image`.
    #[serde(default)]
    pub og_image: Option<String>,

    /// Copyright notice for the rss channel.
    #[serde(default)]
    pub copyright: String,
}

impl BaseConfig {
    /// Title of the home page, e.g. `"Koumo Blog."`.
    pub fn blog_title(&self) -> String {
        format!("{} Blog.", self.title)
    }
}
