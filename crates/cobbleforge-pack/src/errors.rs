//! Filesystem-side errors.

use std::path::PathBuf;

use cobbleforge_core::ProfileError;
use cobbleforge_docs::DocError;

/// Errors produced while persisting documents or processing assets.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// An I/O operation failed.
    #[error("io error at {}: {source}", .path.display())]
    Io {
        /// The path the operation targeted.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An existing MERGE target was not a JSON object.
    #[error("cannot merge into {}: {reason}", .path.display())]
    MergeTarget {
        /// The merge target path.
        path: PathBuf,
        /// Why the existing content was unusable.
        reason: String,
    },

    /// The asset scan root does not exist or is not a directory.
    #[error("scan directory {} does not exist or is not a directory", .path.display())]
    ScanRoot {
        /// The requested scan root.
        path: PathBuf,
    },

    /// Attribute normalization failed.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Document synthesis failed.
    #[error(transparent)]
    Doc(#[from] DocError),
}

impl PackError {
    /// Wrap an I/O error with the path it occurred at.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
