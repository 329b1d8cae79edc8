//! Error types for buffer and file-system operations

use crate::document::Position;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the fallible plumbing around the markup builders.
///
/// User-facing validation problems (bad table sizes, cancelled prompts) are not
/// errors: they are reported through the [`Notifier`](crate::host::Notifier)
/// and surface as an aborted command.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// Reading or writing a document failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Walking a directory tree failed
    #[error("failed to list files under '{root}': {message}")]
    Walk { root: PathBuf, message: String },
    /// A position does not exist in the document
    #[error("position {0} is outside the document")]
    InvalidPosition(Position),
    /// Two edits of one batch touch the same text
    #[error("edits overlapping at {0} cannot be applied as one batch")]
    OverlappingEdits(Position),
}

impl MarkupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MarkupError::Io {
            path: path.into(),
            source,
        }
    }
}
