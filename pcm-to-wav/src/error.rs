//! Error types for pcm-to-wav
//!
//! Every variant is a filesystem failure: the conversion trusts input bytes
//! verbatim, so the only way it can fail is by not being able to read
//! fragments or write the container.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the converter
#[derive(Error, Debug)]
pub enum Error {
    /// Fragment directory missing or not listable
    #[error("Failed to read directory {path:?}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fragment file could not be opened or read
    #[error("Failed to read fragment {path:?}: {source}")]
    ReadFragment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output container could not be created (bad parent, permissions)
    #[error("Failed to create output {path:?}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// Payload write or header finalization failed
    #[error("Failed to write output {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
}

/// Convenience Result type using the converter Error
pub type Result<T> = std::result::Result<T, Error>;
