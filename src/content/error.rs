//! Content loading errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("posts directory `{0}` not found")]
    MissingDir(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] serde_yaml::Error),

    #[error("invalid post slug `{0}`")]
    InvalidSlug(String),
}
