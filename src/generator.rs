//! Generated site-wide files besides HTML pages.

pub mod rss;
