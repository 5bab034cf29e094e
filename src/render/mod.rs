//! Page rendering.
//!
//! ```text
//! render_index / render_post
//!     └── layout::render_document   <html>, <head>, theme script, footer
//!             ├── nav               brand + profile links + theme switch
//!             ├── hero / stories    home feed
//!             └── post_header       post page
//! ```
//!
//! Every component writes into a shared [`html::HtmlWriter`]; only the page
//! functions return a finished `String`.

mod footer;
pub mod html;
mod hero;
mod icons;
mod index;
mod layout;
mod nav;
mod parts;
mod post;
mod post_header;
mod stories;
mod switch;

pub use index::render_index;
pub use post::render_post;

use crate::{config::SiteConfig, theme::ThemeSwitch};

/// Everything a page needs besides its own content.
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub theme_switch: &'a ThemeSwitch,
}

#[cfg(test)]
pub(crate) mod testing {
    use super::html::{HtmlWriter, finish, new_writer};
    use crate::content::{Author, PostSummary};
    use anyhow::Result;

    pub fn render<F: FnOnce(&mut HtmlWriter) -> Result<()>>(f: F) -> String {
        let mut writer = new_writer();
        f(&mut writer).unwrap();
        finish(writer).unwrap()
    }

    pub fn post(title: &str) -> PostSummary {
        PostSummary {
            title: title.into(),
            date: "2024-01-05T10:00:00.000Z".into(),
            slug: title.to_lowercase().replace(' ', "-"),
            author: Author {
                name: "Koumo".into(),
                picture: "/assets/me.png".into(),
            },
            cover_image: format!("/assets/{}.jpg", title.to_lowercase()),
            excerpt: format!("All about {title}"),
        }
    }
}
