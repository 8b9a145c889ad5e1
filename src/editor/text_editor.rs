//! The editor that owns a document and its command history.

use super::command::EditCommand;
use super::document::Document;
use super::error::EditorError;
use crate::framework::History;

/// A document plus the commands that shaped it.
///
/// # Usage
/// ```
/// use pattern_recipe::editor::{EditCommand, TextEditor};
///
/// let mut editor = TextEditor::new();
/// editor.execute(EditCommand::insert("Hello", 0)).unwrap();
/// editor.execute(EditCommand::insert(" World", 5)).unwrap();
/// editor.undo().unwrap();
/// assert_eq!(editor.content(), "Hello");
/// editor.redo().unwrap();
/// assert_eq!(editor.content(), "Hello World");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextEditor {
    document: Document,
    history: History<EditCommand>,
}

impl TextEditor {
    /// Creates an editor over an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor over existing text. The initial text is not undoable.
    pub fn with_document(document: impl Into<Document>) -> Self {
        Self {
            document: document.into(),
            history: History::new(),
        }
    }

    /// Applies `command`, records it and drops any redo chain.
    ///
    /// # Errors
    /// [`EditorError::OutOfRange`] if the command does not fit the document.
    /// Nothing is recorded and the redo stack survives.
    pub fn execute(&mut self, command: EditCommand) -> Result<(), EditorError> {
        self.history.execute(command, &mut self.document)
    }

    /// Shorthand for executing [`EditCommand::insert`].
    pub fn insert(&mut self, text: impl Into<String>, position: usize) -> Result<(), EditorError> {
        self.execute(EditCommand::insert(text, position))
    }

    /// Shorthand for executing [`EditCommand::delete`]. Returns the removed text.
    pub fn delete(&mut self, position: usize, length: usize) -> Result<String, EditorError> {
        self.execute(EditCommand::delete(position, length))?;
        self.history
            .done()
            .last()
            .and_then(EditCommand::removed)
            .map(str::to_string)
            .ok_or(EditorError::NotApplied { position })
    }

    /// Reverts the last command. `Ok(false)` if there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        self.history.undo(&mut self.document)
    }

    /// Re-applies the last undone command. `Ok(false)` if there was nothing to redo.
    pub fn redo(&mut self) -> Result<bool, EditorError> {
        self.history.redo(&mut self.document)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn content(&self) -> &str {
        self.document.as_str()
    }

    /// Executed commands, oldest first.
    pub fn history(&self) -> &[EditCommand] {
        self.history.done()
    }

    /// Undone commands. The last one is the next [`redo`](TextEditor::redo).
    pub fn redo_stack(&self) -> &[EditCommand] {
        self.history.undone()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
