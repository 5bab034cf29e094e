//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! This enables hot-reloading of `koumo.toml` during watch mode.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CONFIG (ArcSwap)                         │
//! │                                                             │
//! │  ┌─────────────┐     ┌─────────────┐     ┌─────────────┐    │
//! │  │  Reader 1   │     │  Reader 2   │     │   Writer    │    │
//! │  │  (rayon)    │     │  (serve)    │     │  (watch)    │    │
//! │  └──────┬──────┘     └──────┬──────┘     └──────┬──────┘    │
//! │         ▼                   ▼                   ▼           │
//! │       cfg()              cfg()           reload_config()    │
//! │    (lock-free)         (lock-free)      (atomic replace)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use super::SiteConfig;
use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use std::{
    fs,
    sync::{
        Arc, LazyLock,
        atomic::{AtomicU64, Ordering},
    },
};

/// Global config storage with atomic replacement support.
///
/// Initialized with default config, then replaced with loaded config in main.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Hash of the config file content that produced the current `CONFIG`.
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

/// Get current config as `Arc<SiteConfig>`.
///
/// Lock-free read via atomic load; the Arc auto-derefs to `&SiteConfig`.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// First 8 bytes of the blake3 digest, enough to detect edits.
fn content_hash(content: &[u8]) -> u64 {
    let digest = blake3::hash(content);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Replace config atomically (called when koumo.toml changes).
///
/// Returns `true` if config was actually updated, `false` if the file
/// content matches the last load. Readers holding the old `Arc` keep it.
pub fn reload_config() -> Result<bool> {
    let current = cfg();
    let cli = current
        .cli
        .context("config was initialized without CLI arguments")?;

    let content = fs::read_to_string(&current.config_path)
        .with_context(|| format!("Failed to read {}", current.config_path.display()))?;
    let new_hash = content_hash(content.as_bytes());
    if new_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let new_config = SiteConfig::load(cli)?;
    new_config.validate()?;

    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);
    Ok(true)
}

/// Initialize global config (called once at startup).
pub fn init_config(config: SiteConfig) {
    if let Ok(content) = fs::read_to_string(&config.config_path) {
        CONFIG_HASH.store(content_hash(content.as_bytes()), Ordering::Relaxed);
    }
    CONFIG.store(Arc::new(config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_stable_and_sensitive() {
        let a = content_hash(b"[base]\ntitle = \"A\"");
        assert_eq!(a, content_hash(b"[base]\ntitle = \"A\""));
        assert_ne!(a, content_hash(b"[base]\ntitle = \"B\""));
    }
}
