//! # Pattern Recipe Demo
//!
//! Runs both pattern scenarios:
//! 1.  The undo/redo text editor building "Hello World".
//! 2.  The connection state machine going through open, acknowledge and close.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use pattern_recipe::editor::EditorError;
use pattern_recipe::runtime::{run_connection_demo, run_editor_demo, setup_tracing};
use tracing::info;

fn main() -> Result<(), EditorError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting pattern demos");

    let editor = run_editor_demo()?;
    info!(content = editor.content(), history = editor.history().len(), "Editor demo finished");

    let reports = run_connection_demo();
    let transitions = reports.iter().filter(|r| r.changed_state()).count();
    info!(operations = reports.len(), transitions, "Connection demo finished");

    info!("Application completed successfully");
    Ok(())
}
