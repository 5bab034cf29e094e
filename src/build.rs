//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()        clean / create the output dir
//!     ├── get_all_posts()         one blocking fetch, newest first
//!     ├── write_index()           compose FeedView → index.html
//!     ├── rayon::join
//!     │       ├── write_posts()   posts/<slug>/index.html (parallel)
//!     │       └── copy_assets()   assets/ → output/assets/
//!     └── build_rss()             feed.xml when enabled
//! ```

use crate::{
    config::SiteConfig,
    content::{ContentSource, MarkdownSource, PostField, PostSummary},
    feed,
    generator::rss::build_rss,
    log,
    render::{PageContext, render_index, render_post},
    theme::{ThemeStore, ThemeSwitch},
    utils::minify::minify_page,
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};
use walkdir::WalkDir;

/// Build the entire site into `[build] output`.
///
/// Returns the posts that were rendered, newest first.
/// If `config.build.clean` is true, clears the output directory first.
pub fn build_site(config: &SiteConfig) -> Result<Vec<PostSummary>> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let source = MarkdownSource::new(&config.build.content);
    let posts = source.get_all_posts(&PostField::ALL)?;
    log!("content"; "found {} posts", posts.len());

    let store = Arc::new(ThemeStore::new(config.theme.default.clone()));
    let theme_switch = ThemeSwitch::new(store);
    let ctx = PageContext {
        config,
        theme_switch: &theme_switch,
    };

    write_index(&ctx, &posts)?;

    let has_error = AtomicBool::new(false);
    let (posts_result, assets_result) = rayon::join(
        || write_posts(&ctx, &source, &posts, &has_error),
        || copy_assets(config, &has_error),
    );
    posts_result?;
    let asset_count = assets_result?;

    build_rss(config, &posts)?;

    log!("build"; "done: {} posts, {} assets → {}", posts.len(), asset_count, output.display());
    Ok(posts)
}

fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

fn write_index(ctx: &PageContext<'_>, posts: &[PostSummary]) -> Result<()> {
    let view = feed::compose(posts.to_vec());
    let html = render_index(ctx, &view)?;
    write_page(&ctx.config.build.output.join("index.html"), &html, ctx.config)
}

/// Render every post page. The first failure stops the remaining ones.
fn write_posts(
    ctx: &PageContext<'_>,
    source: &MarkdownSource,
    posts: &[PostSummary],
    has_error: &AtomicBool,
) -> Result<()> {
    posts.par_iter().try_for_each(|summary| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        let result = source
            .get_post_by_slug(&summary.slug)
            .map_err(anyhow::Error::from)
            .and_then(|post| render_post(ctx, &post))
            .and_then(|html| write_page(&post_page_path(ctx.config, &summary.slug), &html, ctx.config));

        if let Err(e) = result {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", summary.slug, e);
            }
            return Err(anyhow!("Build failed"));
        }
        Ok(())
    })
}

fn post_page_path(config: &SiteConfig, slug: &str) -> PathBuf {
    config.build.output.join("posts").join(slug).join("index.html")
}

fn write_page(path: &Path, html: &str, config: &SiteConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let html = minify_page(html.as_bytes(), config);
    fs::write(path, &*html).with_context(|| format!("Failed to write {}", path.display()))
}

/// Mirror the assets directory under the output directory, keeping its name.
///
/// A missing assets directory is not an error. Returns the number of files copied.
fn copy_assets(config: &SiteConfig, has_error: &AtomicBool) -> Result<usize> {
    let assets = &config.build.assets;
    if !assets.exists() {
        return Ok(0);
    }
    let dest_root = match assets.file_name() {
        Some(name) => config.build.output.join(name),
        None => config.build.output.join("assets"),
    };

    let files: Vec<PathBuf> = WalkDir::new(assets)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    files.par_iter().try_for_each(|path| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = copy_asset(path, assets, &dest_root) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", path.display(), e);
            }
            return Err(anyhow!("Build failed"));
        }
        Ok(())
    })?;

    Ok(files.len())
}

fn copy_asset(path: &Path, assets: &Path, dest_root: &Path) -> Result<()> {
    let relative = path.strip_prefix(assets)?;
    let dest = dest_root.join(relative);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(path, &dest).with_context(|| format!("Failed to copy {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use tempfile::TempDir;

    fn write_post(dir: &Path, slug: &str, title: &str, date: &str) {
        let body = format!(
            "---\ntitle: '{title}'\ndate: '{date}'\nexcerpt: 'About {title}'\ncoverImage: '/assets/{slug}.jpg'\nauthor:\n  name: Koumo\n  picture: '/assets/me.png'\n---\n\n# {title}\n\nBody of {title}.\n"
        );
        fs::write(dir.join(format!("{slug}.md")), body).unwrap();
    }

    fn site() -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let posts = root.join("_posts");
        fs::create_dir_all(&posts).unwrap();
        fs::create_dir_all(root.join("assets/images")).unwrap();
        fs::write(root.join("assets/images/logo.png"), b"png").unwrap();

        write_post(&posts, "a", "A", "2024-03-01T00:00:00.000Z");
        write_post(&posts, "b", "B", "2024-02-01T00:00:00.000Z");
        write_post(&posts, "c", "C", "2024-01-01T00:00:00.000Z");

        let mut config = SiteConfig::default();
        config.base.title = "Koumo".into();
        config.build.content = posts;
        config.build.assets = root.join("assets");
        config.build.output = root.join("public");
        config.build.minify = false;
        (dir, config)
    }

    #[test]
    fn test_build_writes_pages() {
        let (_dir, config) = site();
        let posts = build_site(&config).unwrap();

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "b", "c"]);

        let output = &config.build.output;
        assert!(output.join("index.html").exists());
        for slug in slugs {
            assert!(output.join("posts").join(slug).join("index.html").exists());
        }
        assert_eq!(fs::read(output.join("assets/images/logo.png")).unwrap(), b"png");
        assert!(!output.join("feed.xml").exists());
    }

    #[test]
    fn test_index_hero_and_stories() {
        let (_dir, config) = site();
        build_site(&config).unwrap();

        let index = fs::read_to_string(config.build.output.join("index.html")).unwrap();
        assert!(index.contains(r#"<h3 class="hero-post__title"><a href="/posts/a/">A</a></h3>"#));

        let re = Regex::new(r#"<h3 class="post-preview__title"><a href="[^"]*">([^<]*)</a></h3>"#)
            .unwrap();
        let titles: Vec<_> = re.captures_iter(&index).map(|c| c[1].to_owned()).collect();
        assert_eq!(titles, ["B", "C"]);
    }

    #[test]
    fn test_post_page_has_rendered_body() {
        let (_dir, config) = site();
        build_site(&config).unwrap();

        let page = fs::read_to_string(config.build.output.join("posts/b/index.html")).unwrap();
        assert!(page.contains("<title>B | Koumo Blog.</title>"));
        assert!(page.contains("<p>Body of B.</p>"));
    }

    #[test]
    fn test_empty_site() {
        let (_dir, config) = site();
        for entry in fs::read_dir(&config.build.content).unwrap() {
            fs::remove_file(entry.unwrap().path()).unwrap();
        }
        let posts = build_site(&config).unwrap();
        assert!(posts.is_empty());

        let index = fs::read_to_string(config.build.output.join("index.html")).unwrap();
        assert!(!index.contains(r#"data-section="hero""#));
        assert!(!index.contains(r#"data-section="more-stories""#));
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let (_dir, mut config) = site();
        fs::create_dir_all(&config.build.output).unwrap();
        let stale = config.build.output.join("stale.html");
        fs::write(&stale, "old").unwrap();

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn test_rss_written_when_enabled() {
        let (_dir, mut config) = site();
        config.base.url = Some("https://koumo.dev".into());
        config.build.rss.enable = true;
        build_site(&config).unwrap();

        let feed = fs::read_to_string(config.build.output.join("feed.xml")).unwrap();
        assert!(feed.contains("https://koumo.dev/posts/a/"));
    }

    #[test]
    fn test_missing_content_dir_fails() {
        let (_dir, mut config) = site();
        config.build.content = config.build.content.join("nope");
        assert!(build_site(&config).is_err());
    }
}
