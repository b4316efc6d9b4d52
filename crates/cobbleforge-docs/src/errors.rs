//! Synthesis errors.

/// Errors produced while synthesizing a document.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// An addition was requested with no changes at all.
    #[error("no changes requested; nothing to write")]
    NoChanges,

    /// Converting a document shape to JSON failed.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}
