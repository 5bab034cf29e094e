//! Markdown post source.
//!
//! Posts live as `<slug>.md` files in the posts directory, each starting
//! with a YAML front matter block:
//!
//! ```text
//! ---
//! title: 'Dynamic Routing and Static Generation'
//! excerpt: 'Lorem ipsum dolor sit amet'
//! coverImage: '/assets/blog/dynamic-routing/cover.jpg'
//! date: '2020-03-16T05:35:07.322Z'
//! author:
//!   name: JJ Kasper
//!   picture: '/assets/blog/authors/jj.jpeg'
//! ogImage:
//!   url: '/assets/blog/dynamic-routing/cover.jpg'
//! ---
//!
//! Markdown body...
//! ```

mod error;
mod front_matter;
mod markdown;
mod post;
mod source;

pub use error::ContentError;
pub use post::{Author, Post, PostField, PostSummary};
pub use source::MarkdownSource;

/// Anything that can hand out posts at build time.
pub trait ContentSource {
    /// All posts, newest first, with only `fields` populated.
    fn get_all_posts(&self, fields: &[PostField]) -> Result<Vec<PostSummary>, ContentError>;

    /// One complete post including its rendered body.
    fn get_post_by_slug(&self, slug: &str) -> Result<Post, ContentError>;
}
