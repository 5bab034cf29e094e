//! YAML front matter between `---` fences.

use super::post::Author;
use serde::Deserialize;

/// Front matter keys understood by the blog. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: String,
    pub excerpt: String,
    pub cover_image: String,
    pub date: String,
    pub author: Author,
    pub og_image: OgImage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OgImage {
    pub url: String,
}

/// Split a document into `(front matter, body)`.
///
/// The block must open on the very first line. Without a closing fence
/// the whole text is treated as body.
pub fn split(raw: &str) -> (Option<&str>, &str) {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let Some(rest) = text.strip_prefix("---") else {
        return (None, text);
    };
    let Some(rest) = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
    else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, text)
}

/// Parse the YAML block. An empty block yields defaults.
pub fn parse(yaml: &str) -> Result<FrontMatter, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(yaml)
}
