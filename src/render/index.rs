//! Home page.

use super::{
    PageContext,
    hero::write_hero,
    html::write_text_elem,
    layout::{PageMeta, render_document},
    stories::write_more_stories,
};
use crate::feed::FeedView;
use anyhow::Result;

/// Render the home page for an already composed feed.
///
/// The hero section is written only when the feed has a hero post, the
/// "More Stories" section only when there are stories left after it.
pub fn render_index(ctx: &PageContext<'_>, feed: &FeedView) -> Result<String> {
    let base = &ctx.config.base;
    let title = base.blog_title();
    let meta = PageMeta {
        title: &title,
        description: &base.description,
        og_image: base.og_image.as_deref(),
    };

    render_document(ctx, &meta, |w| {
        write_text_elem(w, "h1", &[("class", "intro__title")], &title)?;
        if feed.has_hero()
            && let Some(hero) = &feed.hero_post
        {
            write_hero(w, hero)?;
        }
        if feed.has_more_stories() {
            write_more_stories(w, &feed.more_posts)?;
        }
        Ok(())
    })
}
