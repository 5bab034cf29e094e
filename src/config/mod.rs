//! Site configuration management for `koumo.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url)           |
//! | `[build]`   | Build paths, minify, RSS, extra head entries |
//! | `[serve]`   | Development server (port, interface, watch)  |
//! | `[nav]`     | Brand mark and profile links                 |
//! | `[theme]`   | Default theme preference                     |
//! | `[footer]`  | Footer name and badge                        |
//! | `[extra]`   | User-defined custom fields                   |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Koumo"
//! url = "https://koumo.dev"
//!
//! [build]
//! content = "_posts"
//! output = "public"
//!
//! [[nav.links]]
//! platform = "github"
//! url = "https://github.com/koumo"
//!
//! [theme]
//! default = "system"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod handle;
mod nav;
mod serve;
mod theme;

pub use handle::{cfg, init_config, reload_config};
pub use nav::NavLink;

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use nav::NavConfig;
use serve::ServeConfig;
use theme::{FooterConfig, ThemeConfig};

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing koumo.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Navigation bar
    #[serde(default)]
    pub nav: NavConfig,

    /// Theme switch
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Page footer
    #[serde(default)]
    pub footer: FooterConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config named by the CLI (or defaults for `init`) and apply CLI overrides.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Absolute path of the rss feed inside the output directory.
    pub fn rss_path(&self) -> PathBuf {
        self.build.output.join(&self.build.rss.path)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let base = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };
        self.update_path_with_root(cli, &root);

        if let Some(args) = cli.build_args() {
            self.build.clean |= args.clean;
            Self::update_option(&mut self.build.minify, args.minify.as_ref());
            Self::update_option(&mut self.build.rss.enable, args.rss.as_ref());
            if let Some(url) = &args.base_url {
                self.base.url = Some(url.trim_end_matches('/').to_owned());
            }
        }

        if let Commands::Serve {
            interface,
            port,
            watch,
            build_args,
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            Self::update_option(&mut self.serve.watch, watch.as_ref());
            if build_args.base_url.is_none() {
                self.base.url = Some(format!(
                    "http://{}:{}",
                    self.serve.interface, self.serve.port
                ));
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, cli: &Cli, root: &Path) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.assets, cli.assets.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.build.rss.enable && self.base.url.is_none() {
            bail!(ConfigError::Validation(
                "[base.url] is required for RSS generation".into()
            ));
        }

        if self.theme.storage_key.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[theme.storage_key] must not be empty".into()
            ));
        }

        if self.build.output == self.build.content || self.build.output == self.build.assets {
            bail!(ConfigError::Validation(
                "[build.output] must differ from [build.content] and [build.assets]".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
