//! End-to-end demo scenarios.
//!
//! Each function sequences calls against one pattern's public API and logs what
//! happened. The binary runs both; the tests run them to check the scenarios
//! still end where they should.

use crate::connection::{Connection, Report};
use crate::editor::{EditCommand, EditorError, TextEditor};
use tracing::{debug, info, info_span};

/// Builds "Hello World" with two inserts, then undoes and redoes the second.
///
/// Returns the editor so callers can inspect the final document and stacks.
pub fn run_editor_demo() -> Result<TextEditor, EditorError> {
    let _span = info_span!("editor_demo").entered();
    let mut editor = TextEditor::new();

    editor.execute(EditCommand::insert("Hello", 0))?;
    info!(content = editor.content(), "Document");

    editor.execute(EditCommand::insert(" World", 5))?;
    info!(content = editor.content(), "Document");
    debug!(history = ?editor.history(), redo = ?editor.redo_stack(), "Stacks");

    editor.undo()?;
    info!(content = editor.content(), "Document after undo");
    debug!(history = ?editor.history(), redo = ?editor.redo_stack(), "Stacks");

    editor.redo()?;
    info!(content = editor.content(), "Document after redo");

    Ok(editor)
}

/// Walks a connection through open, acknowledge, close and a second close.
pub fn run_connection_demo() -> Vec<Report> {
    let _span = info_span!("connection_demo").entered();
    let mut connection = Connection::new();

    let reports = vec![
        connection.open(),
        connection.acknowledge(),
        connection.close(),
        connection.close(),
    ];

    for report in &reports {
        info!(state = %report.to, "{report}");
    }
    reports
}
