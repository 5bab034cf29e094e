//! File system watcher for live rebuild.
//!
//! Watches the posts directory, the assets directory and the config file.
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────────────────────────┐
//! │ notify   │───▶│ Debouncer │───▶│ handle_changes()             │
//! │ events   │    │ (300ms)   │    │  config → reload_config()    │
//! └──────────┘    └───────────┘    │  then build_site(&cfg())     │
//!                                  └──────────────────────────────┘
//! ```
//!
//! Every relevant change triggers a full rebuild; the home page depends on
//! every post, so there is no narrower unit to rebuild.

use crate::{
    build::build_site,
    config::{SiteConfig, cfg, reload_config},
    log,
    logger::WatchStatus,
};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{RecvTimeoutError, channel},
    time::{Duration, Instant},
};

const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

/// What a changed path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileCategory {
    Config,
    Content,
    Asset,
    Unknown,
}

fn categorize_path(path: &Path, config: &SiteConfig) -> FileCategory {
    if path == config.config_path {
        FileCategory::Config
    } else if path.starts_with(&config.build.content) {
        FileCategory::Content
    } else if path.starts_with(&config.build.assets) {
        FileCategory::Asset
    } else {
        FileCategory::Unknown
    }
}

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// `/blog/_posts/hello.md` → `_posts/hello.md`
fn rel_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

/// Batches rapid file events with debouncing and rebuild cooldown.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
    last_rebuild: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
            last_rebuild: None,
        }
    }

    fn in_cooldown(&self) -> bool {
        self.last_rebuild
            .is_some_and(|t| t.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS))
    }

    fn add(&mut self, event: Event) {
        for path in event.paths {
            if !is_temp_file(&path) {
                self.pending.insert(path);
            }
        }
        self.last_event = Some(Instant::now());
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn mark_rebuild(&mut self) {
        self.last_rebuild = Some(Instant::now());
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

/// Rebuild for a batch of changed paths. Returns true if a rebuild succeeded.
fn handle_changes(paths: &[PathBuf], status: &mut WatchStatus) -> bool {
    let config = cfg();
    let categories: Vec<_> = paths.iter().map(|p| categorize_path(p, &config)).collect();
    let Some(trigger) = paths
        .iter()
        .zip(&categories)
        .find(|(_, cat)| **cat != FileCategory::Unknown)
        .map(|(path, _)| rel_path(path, config.get_root()))
    else {
        return false;
    };

    if categories.contains(&FileCategory::Config) {
        match reload_config() {
            Ok(true) => log!("watch"; "config reloaded"),
            Ok(false) => {}
            Err(e) => {
                status.error("config reload failed, keeping previous config", &format!("{e:#}"));
                return false;
            }
        }
    }

    let config = cfg();
    match build_site(&config) {
        Ok(posts) => {
            status.success(&format!("rebuilt ({trigger}): {} posts", posts.len()));
            true
        }
        Err(e) => {
            status.error(&format!("build failed ({trigger})"), &format!("{e:#}"));
            false
        }
    }
}

fn setup_watchers(watcher: &mut impl Watcher, config: &SiteConfig) -> Result<()> {
    let targets = [
        (&config.build.content, RecursiveMode::Recursive),
        (&config.build.assets, RecursiveMode::Recursive),
        (&config.config_path, RecursiveMode::NonRecursive),
    ];

    let root = config.get_root();
    let mut watched = Vec::with_capacity(targets.len());
    for (path, mode) in targets {
        if !path.exists() {
            continue;
        }
        watcher
            .watch(path, mode)
            .with_context(|| format!("Failed to watch {}", path.display()))?;
        watched.push(rel_path(path, root));
    }

    log!("watch"; "{}", watched.join(", "));
    Ok(())
}

const fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

/// Start blocking file watcher with debouncing and live rebuild.
pub fn watch_for_changes_blocking() -> Result<()> {
    let (tx, rx) = channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    setup_watchers(&mut watcher, &cfg())?;

    let mut debouncer = Debouncer::new();
    let mut status = WatchStatus::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) && !debouncer.in_cooldown() => {
                debouncer.add(event);
            }
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(RecvTimeoutError::Timeout) if debouncer.ready() => {
                if handle_changes(&debouncer.take(), &mut status) {
                    debouncer.mark_rebuild();
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
            _ => {}
        }
    }

    Ok(())
}
