//! Error types surfaced to the user as dialogs

use std::path::PathBuf;
use thiserror::Error;

use crate::constants::{ERROR_EMPTY_SEARCH, ERROR_INVALID_SEARCH};

/// Rejected search input. The display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{}", ERROR_EMPTY_SEARCH)]
    Empty,
    #[error("{}", ERROR_INVALID_SEARCH)]
    InvalidCharacters,
}

/// A recycling symbols image could not be turned into something renderable
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Could not open image '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not decode image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ImageLoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ImageLoadError::Open { path, .. } | ImageLoadError::Decode { path, .. } => path,
        }
    }
}
