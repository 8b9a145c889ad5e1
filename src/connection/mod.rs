//! TCP-like connection driven by the state pattern.
//!
//! A [`Connection`] holds one [`ConnectionState`]. The three operations
//! (`open`, `close`, `acknowledge`) are defined for every state; what they do is
//! looked up in the transition table on [`ConnectionState::on`]. Each call hands
//! back a [`Report`], so no operation is ever silent.

mod machine;
pub mod report;
pub mod state;

pub use machine::*;
pub use report::*;
pub use state::*;
