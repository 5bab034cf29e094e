//! `[build]` section configuration.
//!
//! Contains build settings: paths, minification, rss and extra `<head>` entries.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in koumo.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// content = "_posts"     # Markdown posts
/// output = "public"      # Output directory
/// minify = true          # Minify HTML
///
/// [build.rss]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Markdown posts directory.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static assets directory, copied into the output under its own name.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Minify HTML output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Clear output directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// RSS feed generation settings.
    #[serde(default)]
    pub rss: RssConfig,

    /// Custom `<head>` elements.
    #[serde(default)]
    pub head: HeadConfig,
}

/// `[build.rss]` section - RSS feed generation configuration.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    /// Enable RSS feed generation.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub enable: bool,

    /// Output path for RSS feed file, relative to the output directory.
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,
}

/// `[build.head]` section - extra entries injected into every `<head>`.
///
/// Values are URLs as they should appear in the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadConfig {
    /// Favicon URL.
    pub icon: Option<String>,

    /// Stylesheet URLs, in order.
    pub styles: Vec<String>,

    /// Raw HTML elements (trusted input).
    pub elements: Vec<String>,
}
