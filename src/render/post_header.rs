//! Header of a single post page: title, author, cover and date.

use super::{
    html::{HtmlWriter, write_elem, write_text_elem},
    parts::{write_avatar, write_cover_image, write_date},
};
use crate::content::PostSummary;
use anyhow::Result;

pub fn write_post_header(writer: &mut HtmlWriter, post: &PostSummary) -> Result<()> {
    write_elem(writer, "header", &[("class", "post-header")], |w| {
        write_text_elem(w, "h1", &[("class", "post-title")], &post.title)?;
        write_elem(w, "div", &[("class", "post-header__author hidden md:block")], |w| {
            write_avatar(w, &post.author)
        })?;
        write_cover_image(w, &post.title, &post.cover_image, None)?;
        write_elem(w, "div", &[("class", "post-header__meta")], |w| {
            write_elem(w, "div", &[("class", "post-header__author md:hidden")], |w| {
                write_avatar(w, &post.author)
            })?;
            write_elem(w, "div", &[("class", "post-header__date")], |w| {
                write_date(w, &post.date)
            })
        })
    })
}
