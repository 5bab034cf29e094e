//! Home page view model: one hero post plus the remaining stories.

use crate::content::PostSummary;

/// What the home page shows, derived from the ordered post list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedView {
    pub hero_post: Option<PostSummary>,
    pub more_posts: Vec<PostSummary>,
}

impl FeedView {
    /// Render the hero section only when there is a hero post.
    #[inline]
    pub const fn has_hero(&self) -> bool {
        self.hero_post.is_some()
    }

    /// Render "More Stories" only when at least one story remains.
    #[inline]
    pub fn has_more_stories(&self) -> bool {
        !self.more_posts.is_empty()
    }
}

/// Split `all_posts` into the first post and the rest, keeping order.
pub fn compose(all_posts: Vec<PostSummary>) -> FeedView {
    let mut posts = all_posts.into_iter();
    FeedView {
        hero_post: posts.next(),
        more_posts: posts.collect(),
    }
}
