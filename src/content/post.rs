//! Post records handed to the renderer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub picture: String,
}

/// Fields a caller can request from [`ContentSource::get_all_posts`](super::ContentSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostField {
    Title,
    Date,
    Slug,
    Author,
    CoverImage,
    Excerpt,
}

impl PostField {
    /// Everything a feed card needs.
    pub const ALL: [PostField; 6] = [
        Self::Title,
        Self::Date,
        Self::Slug,
        Self::Author,
        Self::CoverImage,
        Self::Excerpt,
    ];
}

/// Post metadata as listed on the home page.
///
/// Fields that were not requested stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostSummary {
    pub title: String,
    /// Raw date from front matter (ISO 8601).
    pub date: String,
    pub slug: String,
    pub author: Author,
    pub cover_image: String,
    pub excerpt: String,
}

impl PostSummary {
    /// Copy of `self` keeping only `fields`.
    pub fn project(&self, fields: &[PostField]) -> Self {
        let mut out = Self::default();
        for field in fields {
            match field {
                PostField::Title => out.title.clone_from(&self.title),
                PostField::Date => out.date.clone_from(&self.date),
                PostField::Slug => out.slug.clone_from(&self.slug),
                PostField::Author => out.author.clone_from(&self.author),
                PostField::CoverImage => out.cover_image.clone_from(&self.cover_image),
                PostField::Excerpt => out.excerpt.clone_from(&self.excerpt),
            }
        }
        out
    }

    /// Site-relative URL of the post page.
    pub fn url_path(&self) -> String {
        format!("/posts/{}/", self.slug)
    }
}

/// A complete post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub summary: PostSummary,
    pub og_image: String,
    /// Body rendered to HTML.
    pub content: String,
}
