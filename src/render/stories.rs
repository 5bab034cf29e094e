//! "More Stories" grid of post previews.

use super::{
    html::{HtmlWriter, write_elem, write_text_elem},
    parts::{write_avatar, write_cover_image, write_date, write_linked_title},
};
use crate::content::PostSummary;
use anyhow::Result;

pub fn write_more_stories(writer: &mut HtmlWriter, posts: &[PostSummary]) -> Result<()> {
    write_elem(
        writer,
        "section",
        &[("class", "more-stories"), ("data-section", "more-stories")],
        |w| {
            write_text_elem(w, "h2", &[("class", "more-stories__heading")], "More Stories")?;
            write_elem(w, "div", &[("class", "more-stories__grid")], |w| {
                posts.iter().try_for_each(|post| write_preview(w, post))
            })
        },
    )
}

fn write_preview(writer: &mut HtmlWriter, post: &PostSummary) -> Result<()> {
    write_elem(writer, "article", &[("class", "post-preview")], |w| {
        write_cover_image(w, &post.title, &post.cover_image, Some(post.slug.as_str()))?;
        write_linked_title(w, "post-preview__title", post)?;
        write_elem(w, "div", &[("class", "post-preview__date")], |w| {
            write_date(w, &post.date)
        })?;
        write_text_elem(w, "p", &[("class", "post-preview__excerpt")], &post.excerpt)?;
        write_avatar(w, &post.author)
    })
}
