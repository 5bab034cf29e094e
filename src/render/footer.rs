//! Page footer: author name and an optional badge.

use super::{
    PageContext,
    html::{HtmlWriter, write_elem, write_text_elem},
};
use anyhow::Result;

pub fn write_footer(writer: &mut HtmlWriter, ctx: &PageContext<'_>) -> Result<()> {
    let footer = &ctx.config.footer;
    let name = footer
        .name
        .as_deref()
        .unwrap_or(ctx.config.base.author.as_str());

    write_elem(writer, "footer", &[("class", "footer")], |w| {
        write_elem(w, "div", &[("class", "footer__inner")], |w| {
            write_text_elem(w, "span", &[("class", "footer__name")], name)?;
            if let Some(badge) = footer.badge.as_deref() {
                write_text_elem(w, "span", &[("class", "footer__badge")], badge)?;
            }
            Ok(())
        })
    })
}
