//! Site initialization module.
//!
//! Creates a new site with a default configuration, a first post and a
//! stylesheet.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "koumo.toml";

const SITE_DIRS: &[&str] = &["_posts", "assets/images", "assets/styles"];

const HELLO_WORLD: &str = include_str!("embed/init/hello-world.md");
const STYLESHEET: &str = include_str!("embed/init/main.css");
const STYLESHEET_URL: &str = "/assets/styles/main.css";

/// Create a new site under the configured root.
///
/// Without a site name the root (current directory) must be empty.
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `koumo init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_default_config(root, &site_title(root))?;
    init_first_post(root)?;
    fs::write(root.join("assets/styles/main.css"), STYLESHEET)?;
    init_ignored_files(root, &["/public/"])?;

    log!("init"; "created site at {}", root.display());
    Ok(())
}

fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Title for a fresh site, taken from the directory name.
fn site_title(root: &Path) -> String {
    root.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("Koumo")
        .to_owned()
}

fn init_default_config(root: &Path, title: &str) -> Result<()> {
    let mut config = SiteConfig::default();
    config.base.title = title.to_owned();
    config.build.head.styles = vec![STYLESHEET_URL.to_owned()];

    let content = toml::to_string_pretty(&config)?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

fn init_first_post(root: &Path) -> Result<()> {
    let date = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
    let author = SiteConfig::default().base.author;
    let post = HELLO_WORLD.replace("{date}", &date).replace("{author}", &author);
    fs::write(root.join("_posts/hello-world.md"), post)?;
    Ok(())
}

fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `koumo init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

fn init_ignored_files(root: &Path, patterns: &[&str]) -> Result<()> {
    let path = root.join(".gitignore");
    if !path.exists() {
        fs::write(&path, patterns.join("\n") + "\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_site;
    use tempfile::TempDir;

    fn config_at(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config
    }

    #[test]
    fn test_new_site_layout() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("my-blog");
        new_site(&config_at(&root), true).unwrap();

        assert!(root.join("_posts/hello-world.md").is_file());
        assert!(root.join("assets/images").is_dir());
        assert!(root.join("assets/styles/main.css").is_file());
        assert_eq!(fs::read_to_string(root.join(".gitignore")).unwrap(), "/public/\n");

        let config = SiteConfig::from_path(&root.join(CONFIG_FILE)).unwrap();
        assert_eq!(config.base.title, "my-blog");
        assert_eq!(config.build.head.styles, [STYLESHEET_URL]);
    }

    #[test]
    fn test_new_site_builds() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        new_site(&config_at(&root), true).unwrap();

        let mut config = SiteConfig::from_path(&root.join(CONFIG_FILE)).unwrap();
        config.build.content = root.join(&config.build.content);
        config.build.assets = root.join(&config.build.assets);
        config.build.output = root.join(&config.build.output);

        let posts = build_site(&config).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello World");
        assert!(root.join("public/posts/hello-world/index.html").is_file());
        assert!(root.join("public/assets/styles/main.css").is_file());
    }

    #[test]
    fn test_non_empty_dir_rejected_without_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        assert!(new_site(&config_at(dir.path()), false).is_err());
    }

    #[test]
    fn test_existing_structure_rejected() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("_posts")).unwrap();
        assert!(new_site(&config_at(dir.path()), true).is_err());
    }

    #[test]
    fn test_site_title_fallback() {
        assert_eq!(site_title(Path::new("/tmp/notes")), "notes");
        assert_eq!(site_title(Path::new("/")), "Koumo");
    }
}
