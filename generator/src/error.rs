//! Error taxonomy for icon generation.

use std::{io, path::PathBuf};

use thiserror::Error as ThisError;

/// Errors returned while generating the icon set.
///
/// Every variant aborts the run; nothing is retried and files written before
/// the failure are left in place.
#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error("Icon size must be a positive number of pixels, got {0}")]
    InvalidSize(u32),
    #[error("Failed to decode source image at {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to encode PNG for {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl GenerateError {
    /// Splits encoder failures into filesystem errors and genuine encoding errors.
    pub(crate) fn from_encoder(path: PathBuf, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(source) => Self::Write { path, source },
            source => Self::Encode { path, source },
        }
    }
}
