//! Document shell shared by every page.

use super::{
    PageContext,
    footer::write_footer,
    html::{
        HtmlWriter, finish, new_writer, write_doctype, write_elem, write_raw, write_text_elem,
        write_void_elem,
    },
    nav::write_navbar,
};
use anyhow::Result;

/// Applies the stored preference before first paint and wires the switches.
const THEME_SCRIPT: &str = include_str!("../embed/theme.js");

/// Per-page `<head>` values.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub og_image: Option<&'a str>,
}

/// Write a complete page: head, navbar, `main` (filled by `body`) and footer.
pub fn render_document<F>(ctx: &PageContext<'_>, meta: &PageMeta<'_>, body: F) -> Result<String>
where
    F: FnOnce(&mut HtmlWriter) -> Result<()>,
{
    let config = ctx.config;
    let preference = ctx.theme_switch.store().get();

    let mut html_attrs = vec![
        ("lang", config.base.language.as_str()),
        ("data-theme-key", config.theme.storage_key.as_str()),
        ("data-theme-default", config.theme.default.as_str()),
    ];
    if let Some(class) = preference.html_class() {
        html_attrs.push(("class", class));
    }

    let mut writer = new_writer();
    write_doctype(&mut writer)?;
    write_elem(&mut writer, "html", &html_attrs, |w| {
        write_head(w, ctx, meta)?;
        write_elem(w, "body", &[], |w| {
            write_elem(w, "div", &[("class", "min-h-screen")], |w| {
                write_elem(w, "div", &[("class", "container")], |w| {
                    write_navbar(w, ctx)?;
                    write_elem(w, "main", &[], body)
                })
            })?;
            write_footer(w, ctx)
        })
    })?;
    finish(writer)
}

fn write_head(writer: &mut HtmlWriter, ctx: &PageContext<'_>, meta: &PageMeta<'_>) -> Result<()> {
    let build = &ctx.config.build;

    write_elem(writer, "head", &[], |w| {
        write_void_elem(w, "meta", &[("charset", "utf-8")])?;
        write_void_elem(
            w,
            "meta",
            &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
        )?;
        write_text_elem(w, "title", &[], meta.title)?;
        write_void_elem(w, "meta", &[("name", "description"), ("content", meta.description)])?;
        write_void_elem(w, "meta", &[("name", "og:description"), ("content", meta.description)])?;
        if let Some(image) = meta.og_image {
            write_void_elem(w, "meta", &[("property", "og:image"), ("content", image)])?;
        }
        write_void_elem(w, "meta", &[("name", "twitter:title"), ("content", meta.title)])?;

        if let Some(icon) = build.head.icon.as_deref() {
            write_void_elem(w, "link", &[("rel", "icon"), ("href", icon)])?;
        }
        for style in &build.head.styles {
            write_void_elem(w, "link", &[("rel", "stylesheet"), ("href", style.as_str())])?;
        }
        if build.rss.enable {
            let href = format!("/{}", build.rss.path.display());
            write_void_elem(
                w,
                "link",
                &[
                    ("rel", "alternate"),
                    ("type", "application/rss+xml"),
                    ("href", href.as_str()),
                ],
            )?;
        }
        for element in &build.head.elements {
            write_raw(w, element)?;
        }

        write_elem(w, "script", &[], |w| write_raw(w, THEME_SCRIPT))
    })
}
