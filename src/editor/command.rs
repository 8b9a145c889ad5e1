//! Reversible edit commands.
//!
//! This module defines the operations that can be performed on a
//! [`Document`] and implements [`Reversible`] for them, which is what lets a
//! [`History`](crate::framework::History) undo and redo them.

use super::document::Document;
use super::error::EditorError;
use crate::framework::Reversible;
use serde::{Deserialize, Serialize};

/// An edit to a [`Document`].
///
/// Each variant stores enough to both apply and reverse itself:
/// - `Insert`'s inverse is deleting the same span.
/// - `Delete`'s inverse is inserting the captured text at the same position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditCommand {
    /// Splice `text` in at `position`.
    Insert { text: String, position: usize },
    /// Remove `length` characters starting at `position`.
    Delete {
        position: usize,
        length: usize,
        /// Text removed by the last apply. `None` until then.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        removed: Option<String>,
    },
}

impl EditCommand {
    pub fn insert(text: impl Into<String>, position: usize) -> Self {
        EditCommand::Insert {
            text: text.into(),
            position,
        }
    }

    pub fn delete(position: usize, length: usize) -> Self {
        EditCommand::Delete {
            position,
            length,
            removed: None,
        }
    }

    /// Text removed by an applied `Delete`.
    pub fn removed(&self) -> Option<&str> {
        match self {
            EditCommand::Delete { removed, .. } => removed.as_deref(),
            EditCommand::Insert { .. } => None,
        }
    }
}

impl Reversible for EditCommand {
    type Target = Document;
    type Error = EditorError;

    fn apply(&mut self, document: &mut Document) -> Result<(), EditorError> {
        match self {
            EditCommand::Insert { text, position } => document.insert(text, *position),
            EditCommand::Delete {
                position,
                length,
                removed,
            } => {
                *removed = Some(document.delete(*position, *length)?);
                Ok(())
            }
        }
    }

    fn revert(&mut self, document: &mut Document) -> Result<(), EditorError> {
        match self {
            EditCommand::Insert { text, position } => {
                document.delete(*position, text.chars().count())?;
                Ok(())
            }
            EditCommand::Delete {
                position, removed, ..
            } => {
                let text = removed
                    .as_deref()
                    .ok_or(EditorError::NotApplied { position: *position })?;
                document.insert(text, *position)
            }
        }
    }
}
