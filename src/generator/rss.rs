//! rss feed generation.
//!
//! One item per post, in the same newest-first order as the home page.

use crate::{config::SiteConfig, content::PostSummary, log, utils::date};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, sync::LazyLock};

/// Build rss feed if enabled in config.
pub fn build_rss(config: &SiteConfig, posts: &[PostSummary]) -> Result<()> {
    if config.build.rss.enable {
        RssFeed::new(config, posts).write()?;
    }
    Ok(())
}

struct RssFeed<'a> {
    config: &'a SiteConfig,
    posts: &'a [PostSummary],
}

impl<'a> RssFeed<'a> {
    const fn new(config: &'a SiteConfig, posts: &'a [PostSummary]) -> Self {
        Self { config, posts }
    }

    fn base_url(&self) -> Result<&'a str> {
        self.config
            .base
            .url
            .as_deref()
            .ok_or_else(|| anyhow!("[base.url] is required for RSS generation"))
    }

    fn into_xml(self) -> Result<String> {
        let base_url = self.base_url()?;
        let items: Vec<_> = self
            .posts
            .iter()
            .filter_map(|post| post_to_rss_item(post, base_url, self.config))
            .collect();

        let base = &self.config.base;
        let channel = ChannelBuilder::default()
            .title(base.blog_title())
            .link(base_url)
            .description(&base.description)
            .language(base.language.clone())
            .copyright((!base.copyright.is_empty()).then(|| base.copyright.clone()))
            .generator(concat!("koumo ", env!("CARGO_PKG_VERSION")).to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    fn write(self) -> Result<()> {
        let rss_path = self.config.rss_path();
        let xml = self.into_xml()?;

        if let Some(parent) = rss_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&rss_path, xml)?;

        log!("rss"; "{}", rss_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

/// Convert a post to an rss item.
/// Returns None if the title is empty or the date does not parse.
fn post_to_rss_item(post: &PostSummary, base_url: &str, config: &SiteConfig) -> Option<rss::Item> {
    if post.title.is_empty() {
        return None;
    }
    let pub_date = date::to_rfc2822(&post.date)?;
    let link = format!("{}{}", base_url.trim_end_matches('/'), post.url_path());
    let author = normalize_rss_author(&post.author.name, config);
    let description = (!post.excerpt.is_empty()).then(|| post.excerpt.clone());

    Some(
        ItemBuilder::default()
            .title(post.title.clone())
            .link(Some(link.clone()))
            .guid(GuidBuilder::default().permalink(true).value(link).build())
            .description(description)
            .pub_date(pub_date)
            .author(author)
            .build(),
    )
}

/// Normalize author field to rss format: "email@example.com (Name)"
///
/// Priority:
/// 1. Post author if already in valid format
/// 2. Site config author if in valid format
/// 3. Site config email combined with the post author name (or the site author)
fn normalize_rss_author(author: &str, config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.to_owned());
    }

    let site_author = &config.base.author;
    if RE_VALID_AUTHOR.is_match(site_author) {
        return Some(site_author.clone());
    }

    if config.base.email.is_empty() {
        return None;
    }
    let name = if author.is_empty() { site_author.as_str() } else { author };
    Some(format!("{} ({})", config.base.email, name))
}
