//! Directory-backed post source.

use super::{
    ContentError, ContentSource,
    front_matter::{self, FrontMatter},
    markdown::render_markdown,
    post::{Post, PostField, PostSummary},
};
use crate::utils::date;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::{
    cmp::Reverse,
    fs,
    path::PathBuf,
};

const POST_EXTENSION: &str = "md";

/// Reads `<slug>.md` files from one directory (not recursive).
#[derive(Debug, Clone)]
pub struct MarkdownSource {
    dir: PathBuf,
}

impl MarkdownSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Slugs of every post file, sorted by name. Dot-files are skipped.
    pub fn get_post_slugs(&self) -> Result<Vec<String>, ContentError> {
        if !self.dir.is_dir() {
            return Err(ContentError::MissingDir(self.dir.clone()));
        }
        let entries =
            fs::read_dir(&self.dir).map_err(|err| ContentError::Io(self.dir.clone(), err))?;

        let mut slugs: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == POST_EXTENSION))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_owned))
            .filter(|slug| !slug.starts_with('.'))
            .collect();
        slugs.sort_unstable();
        Ok(slugs)
    }

    fn read_post(&self, slug: &str) -> Result<Post, ContentError> {
        if slug.is_empty() || slug.contains(['/', '\\']) || slug.starts_with('.') {
            return Err(ContentError::InvalidSlug(slug.to_owned()));
        }

        let path = self.dir.join(format!("{slug}.{POST_EXTENSION}"));
        let raw = fs::read_to_string(&path).map_err(|err| ContentError::Io(path.clone(), err))?;

        let (yaml, body) = front_matter::split(&raw);
        let meta = match yaml {
            Some(yaml) => front_matter::parse(yaml)
                .map_err(|err| ContentError::FrontMatter(path.clone(), err))?,
            None => FrontMatter::default(),
        };

        Ok(Post {
            summary: PostSummary {
                title: meta.title,
                date: meta.date,
                slug: slug.to_owned(),
                author: meta.author,
                cover_image: meta.cover_image,
                excerpt: meta.excerpt,
            },
            og_image: meta.og_image.url,
            content: render_markdown(body),
        })
    }
}

impl ContentSource for MarkdownSource {
    fn get_all_posts(&self, fields: &[PostField]) -> Result<Vec<PostSummary>, ContentError> {
        let mut posts = self
            .get_post_slugs()?
            .par_iter()
            .map(|slug| self.read_post(slug).map(|post| post.summary))
            .collect::<Result<Vec<_>, _>>()?;

        posts.sort_by_cached_key(newest_first);
        Ok(posts.iter().map(|post| post.project(fields)).collect())
    }

    fn get_post_by_slug(&self, slug: &str) -> Result<Post, ContentError> {
        self.read_post(slug)
    }
}

/// Sort key: parsed date descending (offsets normalized to UTC), then the
/// raw string descending, then slug ascending. Unparsable dates go last.
fn newest_first(post: &PostSummary) -> (Reverse<Option<DateTime<Utc>>>, Reverse<String>, String) {
    (
        Reverse(date::parse_post_date(&post.date)),
        Reverse(post.date.clone()),
        post.slug.clone(),
    )
}
