//! Navigation bar: brand mark, profile links and the theme switch.
//!
//! Two layouts are emitted side by side and CSS picks one per viewport:
//! `navbar__compact` carries only the brand mark, `navbar__wide` carries
//! the brand link, the link row and the switch.

use super::{
    PageContext,
    html::{HtmlWriter, write_elem, write_text, write_void_elem},
    switch::write_theme_switch,
};
use crate::config::NavLink;
use anyhow::Result;

const LOGO_SIZE: &str = "40";

pub fn write_navbar(writer: &mut HtmlWriter, ctx: &PageContext<'_>) -> Result<()> {
    let nav = &ctx.config.nav;

    write_elem(writer, "nav", &[("class", "navbar mb-5")], |w| {
        write_elem(w, "div", &[("class", "navbar__compact sm:hidden")], |w| {
            write_elem(w, "div", &[("class", "navbar__brand")], |w| write_logo(w, ctx))
        })?;

        write_elem(w, "div", &[("class", "navbar__wide hidden sm:flex")], |w| {
            write_elem(
                w,
                "a",
                &[("class", "navbar__brand"), ("href", nav.brand.href.as_str())],
                |w| write_logo(w, ctx),
            )?;

            write_elem(w, "ul", &[("class", "navbar__links")], |w| {
                nav.links.iter().try_for_each(|link| write_profile_link(w, link))
            })?;

            write_elem(w, "div", &[("class", "navbar__actions")], |w| {
                write_theme_switch(w, ctx.theme_switch)
            })
        })
    })
}

fn write_logo(writer: &mut HtmlWriter, ctx: &PageContext<'_>) -> Result<()> {
    let brand = &ctx.config.nav.brand;
    write_void_elem(
        writer,
        "img",
        &[
            ("class", "navbar__logo"),
            ("src", brand.logo.as_str()),
            ("alt", brand.alt.as_str()),
            ("width", LOGO_SIZE),
            ("height", LOGO_SIZE),
        ],
    )
}

/// External link opened in a new tab. An empty URL gives an inert anchor.
fn write_profile_link(writer: &mut HtmlWriter, link: &NavLink) -> Result<()> {
    let mut attrs = vec![("class", "navbar__link"), ("data-platform", link.platform.as_str())];
    if link.url.is_empty() {
        attrs.push(("aria-disabled", "true"));
    } else {
        attrs.extend([
            ("href", link.url.as_str()),
            ("target", "_blank"),
            ("rel", "noopener noreferrer"),
        ]);
    }

    write_elem(writer, "li", &[], |w| {
        write_elem(w, "a", &attrs, |w| write_text(w, &link.platform))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::render::testing::render;
    use crate::theme::{ThemePreference, ThemeStore, ThemeSwitch};
    use std::sync::Arc;

    fn config_with_links(links: &[(&str, &str)]) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.nav.links = links
            .iter()
            .map(|(platform, url)| NavLink {
                platform: (*platform).into(),
                url: (*url).into(),
            })
            .collect();
        config
    }

    fn render_nav(config: &SiteConfig) -> String {
        let switch = ThemeSwitch::new(Arc::new(ThemeStore::new(ThemePreference::Light)));
        let ctx = PageContext {
            config,
            theme_switch: &switch,
        };
        render(|w| write_navbar(w, &ctx))
    }

    #[test]
    fn test_links_in_order_and_external() {
        let config = config_with_links(&[
            ("github", "https://github.com/k"),
            ("twitter", "https://twitter.com/k"),
        ]);
        let html = render_nav(&config);

        let github = html.find(r#"data-platform="github""#).unwrap();
        let twitter = html.find(r#"data-platform="twitter""#).unwrap();
        assert!(github < twitter);
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 2);
    }

    #[test]
    fn test_empty_url_is_inert() {
        let config = config_with_links(&[("linkedin", "")]);
        let html = render_nav(&config);

        assert!(html.contains(
            r#"<a class="navbar__link" data-platform="linkedin" aria-disabled="true">linkedin</a>"#
        ));
        assert!(!html.contains("target="));
    }

    #[test]
    fn test_exactly_one_switch_in_wide_layout() {
        let html = render_nav(&config_with_links(&[]));
        assert_eq!(html.matches("data-theme-switch").count(), 1);

        let wide = html.find("navbar__wide").unwrap();
        let switch = html.find("data-theme-switch").unwrap();
        assert!(switch > wide);
    }

    #[test]
    fn test_compact_layout_has_only_brand() {
        let html = render_nav(&config_with_links(&[("github", "https://github.com/k")]));
        let compact_start = html.find("navbar__compact").unwrap();
        let wide_start = html.find("navbar__wide").unwrap();
        let compact = &html[compact_start..wide_start];

        assert!(compact.contains("navbar__logo"));
        assert!(!compact.contains("navbar__link"));
        assert!(!compact.contains("theme-switch"));
        assert_eq!(html.matches("navbar__logo").count(), 2);
    }
}
