//! Command-based text editor with linear undo/redo.
//!
//! The [`Document`] is only ever changed through [`EditCommand`] values run by a
//! [`TextEditor`]. Each command knows how to apply and revert itself, and the
//! editor keeps them on a generic [`History`](crate::framework::History).

mod command;
pub mod document;
pub mod error;
mod text_editor;

pub use command::*;
pub use document::*;
pub use error::*;
pub use text_editor::*;
