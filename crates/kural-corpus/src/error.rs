//! Error types for the kural-corpus crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while loading corpus fragments.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Failed to read a fragment file or scan a fragment directory.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse a fragment document.
    #[error("failed to parse fragment {path}: {message}")]
    Parse {
        /// Path to the malformed fragment.
        path: PathBuf,
        /// Error message from the deserializer.
        message: String,
    },
}

impl CorpusError {
    /// Creates a `Read` error for a path.
    pub(crate) fn read(path: PathBuf, source: io::Error) -> Self {
        Self::Read { path, source }
    }

    /// Creates a `Parse` error from a serde_json error.
    pub(crate) fn parse(path: PathBuf, source: &serde_json::Error) -> Self {
        Self::Parse {
            path,
            message: source.to_string(),
        }
    }
}
