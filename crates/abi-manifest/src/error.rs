//! Error types for manifest generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Any of these aborts generation; no partial table is written.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("can't read build file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("can't read ABI from {}: {reason}", path.display())]
    InvalidArtifact { path: PathBuf, reason: String },

    #[error("ABI for {name} is not a valid descriptor: {source}")]
    InvalidAbi {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
