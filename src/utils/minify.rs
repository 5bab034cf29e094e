//! HTML minification, switched by `[build] minify`.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify a rendered page when enabled in config.
///
/// Returns `Cow::Borrowed` if minify is disabled.
pub fn minify_page<'a>(html: &'a [u8], config: &SiteConfig) -> Cow<'a, [u8]> {
    if config.build.minify {
        Cow::Owned(minify_html_inner(html))
    } else {
        Cow::Borrowed(html)
    }
}

/// Minify HTML content using `minify_html` crate.
///
/// Inline `<script>` and `<style>` are minified too; the theme script
/// is plain ES5 so this is safe.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(html, &cfg)
}
