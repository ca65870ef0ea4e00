//! Error type for the crop pipeline.
//!
//! A fully transparent input is not an error; see `CropOutcome::FullyTransparent`.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CropError {
    #[error("Failed to load image {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected error processing {path:?}: {detail}")]
    Unexpected { path: PathBuf, detail: String },
}

impl CropError {
    pub fn unexpected<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        CropError::Unexpected {
            path: path.into(),
            detail: e.to_string(),
        }
    }

    /// Path of the file the failure relates to
    pub fn path(&self) -> &std::path::Path {
        match self {
            CropError::Load { path, .. }
            | CropError::Write { path, .. }
            | CropError::Unexpected { path, .. } => path,
        }
    }
}
