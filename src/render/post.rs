//! Single post page.

use super::{
    PageContext,
    html::{write_elem, write_raw},
    layout::{PageMeta, render_document},
    post_header::write_post_header,
};
use crate::content::Post;
use anyhow::Result;

pub fn render_post(ctx: &PageContext<'_>, post: &Post) -> Result<String> {
    let summary = &post.summary;
    let title = format!("{} | {}", summary.title, ctx.config.base.blog_title());
    let og_image = (!post.og_image.is_empty()).then_some(post.og_image.as_str());
    let meta = PageMeta {
        title: &title,
        description: if summary.excerpt.is_empty() {
            ctx.config.base.description.as_str()
        } else {
            summary.excerpt.as_str()
        },
        og_image,
    };

    render_document(ctx, &meta, |w| {
        write_elem(w, "article", &[("class", "post")], |w| {
            write_post_header(w, summary)?;
            write_elem(w, "div", &[("class", "post-body")], |w| {
                write_raw(w, &post.content)
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::render::testing::post;
    use crate::theme::{ThemeStore, ThemeSwitch};
    use std::sync::Arc;

    #[test]
    fn test_post_page() {
        let mut config = SiteConfig::default();
        config.base.title = "Koumo".into();
        let switch = ThemeSwitch::new(Arc::new(ThemeStore::default()));
        let ctx = PageContext {
            config: &config,
            theme_switch: &switch,
        };
        let page = Post {
            summary: post("Alpha"),
            og_image: "/og/alpha.png".into(),
            content: "<p>Hello <em>there</em></p>".into(),
        };

        let html = render_post(&ctx, &page).unwrap();
        assert!(html.contains("<title>Alpha | Koumo Blog.</title>"));
        assert!(html.contains(r#"<meta property="og:image" content="/og/alpha.png"/>"#));
        assert!(html.contains(r#"content="All about Alpha""#));
        assert!(html.contains(r#"<div class="post-body"><p>Hello <em>there</em></p></div>"#));
        assert_eq!(html.matches(r#"data-theme-switch="""#).count(), 1);
    }
}
