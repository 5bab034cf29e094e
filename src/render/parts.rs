//! Small building blocks shared by the hero, story previews and post header.

use super::html::{HtmlWriter, write_elem, write_text, write_text_elem, write_void_elem};
use crate::content::{Author, PostSummary};
use crate::utils::date;
use anyhow::Result;

pub fn write_avatar(writer: &mut HtmlWriter, author: &Author) -> Result<()> {
    write_elem(writer, "div", &[("class", "avatar")], |w| {
        if !author.picture.is_empty() {
            write_void_elem(
                w,
                "img",
                &[
                    ("class", "avatar__picture"),
                    ("src", author.picture.as_str()),
                    ("alt", author.name.as_str()),
                ],
            )?;
        }
        write_text_elem(w, "div", &[("class", "avatar__name")], &author.name)
    })
}

/// `<time>` with the raw value in `datetime` and `March 16, 2020` as text.
pub fn write_date(writer: &mut HtmlWriter, raw: &str) -> Result<()> {
    write_text_elem(writer, "time", &[("datetime", raw)], &date::format_long(raw))
}

/// Cover image, linked to the post when `slug` is given.
///
/// Nothing is written for an empty `src`.
pub fn write_cover_image(
    writer: &mut HtmlWriter,
    title: &str,
    src: &str,
    slug: Option<&str>,
) -> Result<()> {
    if src.is_empty() {
        return Ok(());
    }

    let alt = format!("Cover Image for {title}");
    write_elem(writer, "div", &[("class", "cover-image")], |w| match slug {
        Some(slug) => {
            let href = format!("/posts/{slug}/");
            write_elem(w, "a", &[("href", href.as_str()), ("aria-label", title)], |w| {
                write_cover_img(w, src, &alt, true)
            })
        }
        None => write_cover_img(w, src, &alt, false),
    })
}

fn write_cover_img(writer: &mut HtmlWriter, src: &str, alt: &str, hoverable: bool) -> Result<()> {
    let class = if hoverable {
        "cover-image__img cover-image__img--link"
    } else {
        "cover-image__img"
    };
    write_void_elem(writer, "img", &[("class", class), ("src", src), ("alt", alt)])
}

/// Title heading that links to the post.
pub fn write_linked_title(writer: &mut HtmlWriter, class: &str, post: &PostSummary) -> Result<()> {
    let href = post.url_path();
    write_elem(writer, "h3", &[("class", class)], |w| {
        write_elem(w, "a", &[("href", href.as_str())], |w| write_text(w, &post.title))
    })
}
