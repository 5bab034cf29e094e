//! Thin helpers over `quick_xml::Writer` for emitting HTML.
//!
//! Text goes through `partial_escape` (`<`, `>`, `&`); attribute values are
//! escaped by `quick_xml` itself. Void elements (`img`, `meta`, `link`,
//! `input`) are written with [`write_void_elem`]; everything else needs a
//! matching end tag, which [`write_elem`] takes care of.

use anyhow::Result;
use quick_xml::{
    Writer,
    escape::partial_escape,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write};

pub type HtmlWriter = Writer<Cursor<Vec<u8>>>;

pub fn new_writer() -> HtmlWriter {
    Writer::new(Cursor::new(Vec::with_capacity(16 * 1024)))
}

/// Consume the writer and return the document.
pub fn finish(writer: HtmlWriter) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn start_tag<'a>(tag: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    elem
}

#[inline]
pub fn write_doctype(writer: &mut HtmlWriter) -> Result<()> {
    writer.write_event(Event::DocType(BytesText::from_escaped("html")))?;
    Ok(())
}

/// Write `<tag attrs>`, the body, then `</tag>`.
pub fn write_elem<F>(
    writer: &mut HtmlWriter,
    tag: &str,
    attrs: &[(&str, &str)],
    body: F,
) -> Result<()>
where
    F: FnOnce(&mut HtmlWriter) -> Result<()>,
{
    writer.write_event(Event::Start(start_tag(tag, attrs)))?;
    body(writer)?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write a text element: `<tag attrs>text</tag>`.
#[inline]
pub fn write_text_elem(
    writer: &mut HtmlWriter,
    tag: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    write_elem(writer, tag, attrs, |w| write_text(w, text))
}

/// Write an element that has no closing tag in HTML: `<tag attrs/>`.
#[inline]
pub fn write_void_elem(writer: &mut HtmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    writer.write_event(Event::Empty(start_tag(tag, attrs)))?;
    Ok(())
}

#[inline]
pub fn write_text(writer: &mut HtmlWriter, text: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    Ok(())
}

/// Write trusted markup verbatim (rendered markdown, inline svg, scripts).
#[inline]
pub fn write_raw(writer: &mut HtmlWriter, html: &str) -> Result<()> {
    writer.get_mut().write_all(html.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut HtmlWriter) -> Result<()>>(f: F) -> String {
        let mut writer = new_writer();
        f(&mut writer).unwrap();
        finish(writer).unwrap()
    }

    #[test]
    fn test_nested_elements() {
        let html = render(|w| {
            write_elem(w, "div", &[("class", "box")], |w| {
                write_text_elem(w, "p", &[], "hi")
            })
        });
        assert_eq!(html, r#"<div class="box"><p>hi</p></div>"#);
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(|w| write_text_elem(w, "h1", &[], "Tom & <Jerry>"));
        assert_eq!(html, "<h1>Tom &amp; &lt;Jerry&gt;</h1>");
    }

    #[test]
    fn test_attribute_is_escaped() {
        let html = render(|w| write_void_elem(w, "img", &[("alt", r#"a "quoted" b"#)]));
        assert!(html.starts_with("<img alt=\"a &quot;quoted&quot; b\""));
    }

    #[test]
    fn test_raw_is_verbatim() {
        let html = render(|w| write_elem(w, "div", &[], |w| write_raw(w, "<b>x</b>")));
        assert_eq!(html, "<div><b>x</b></div>");
    }

    #[test]
    fn test_doctype() {
        assert_eq!(render(write_doctype), "<!DOCTYPE html>");
    }
}
