//! Typed failures for the document core.
//!
//! The three variants deliberately mirror the three ways a build can fail:
//! the record was malformed before rendering started, rendering itself hit
//! an invariant violation, or the artifact could not be written. Callers
//! branch on the variant; the contained detail is for logs only.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// Malformed ContentRecord, rejected before any rendering.
    #[error("invalid content record: {0}")]
    InputShape(String),

    /// Invariant violation during rendering. Should not occur with the
    /// built-in style and node sets.
    #[error("rendering failed in {section}: {detail}")]
    Rendering { section: String, detail: String },

    /// The output artifact could not be written. Retry policy belongs to the
    /// caller.
    #[error("failed to write artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
