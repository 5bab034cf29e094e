//! `[serve]` section: where `koumo serve` listens.
//!
//! While serving, the site's `base.url` is rewritten to the local address
//! unless `--base-url` is given (see `SiteConfig::update_with_cli`).

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Dev server settings.
///
/// ```toml
/// [serve]
/// interface = "0.0.0.0"
/// port = 3000
/// watch = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    /// Address to bind. Overridden by `koumo serve -i`.
    #[serde(default = "defaults::serve::interface")]
    #[educe(Default = defaults::serve::interface())]
    pub interface: String,

    /// First port to try. Taken ports are skipped upward.
    #[serde(default = "defaults::serve::port")]
    #[educe(Default = defaults::serve::port())]
    pub port: u16,

    /// Rebuild when posts, assets or `koumo.toml` change.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub watch: bool,
}
