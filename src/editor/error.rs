//! Error types for the editor.

use thiserror::Error;

/// Errors that can occur during editing operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditorError {
    /// The requested span does not fit inside the document.
    ///
    /// For inserts `length` is 0 and `position` is the insertion point.
    #[error("Range out of bounds: position {position} length {length} in document of length {len}")]
    OutOfRange {
        position: usize,
        length: usize,
        len: usize,
    },

    /// A delete was reverted before it captured any text.
    #[error("Delete at position {position} was never applied")]
    NotApplied { position: usize },
}
