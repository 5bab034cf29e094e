//! Hero section: the newest post, shown large.

use super::{
    html::{HtmlWriter, write_elem, write_text_elem},
    parts::{write_avatar, write_cover_image, write_date, write_linked_title},
};
use crate::content::PostSummary;
use anyhow::Result;

pub fn write_hero(writer: &mut HtmlWriter, post: &PostSummary) -> Result<()> {
    write_elem(writer, "section", &[("class", "hero-post"), ("data-section", "hero")], |w| {
        write_cover_image(w, &post.title, &post.cover_image, Some(post.slug.as_str()))?;

        write_elem(w, "div", &[("class", "hero-post__body")], |w| {
            write_elem(w, "div", &[], |w| {
                write_linked_title(w, "hero-post__title", post)?;
                write_elem(w, "div", &[("class", "hero-post__date")], |w| {
                    write_date(w, &post.date)
                })
            })?;
            write_elem(w, "div", &[], |w| {
                write_text_elem(w, "p", &[("class", "hero-post__excerpt")], &post.excerpt)?;
                write_avatar(w, &post.author)
            })
        })
    })
}
