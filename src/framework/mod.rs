//! Generic command engine for undoable operations.
//!
//! This module provides the building blocks shared by every command-based example:
//! a trait for reversible commands and a generic history that runs them.
//!
//! # Main Components
//!
//! - [`Reversible`] - Trait that command types implement to be managed by a history
//! - [`History`] - Generic undo/redo stacks over any [`Reversible`] command
//!
//! # Testing
//!
//! See [`mock`] module for a scriptable command that exercises the engine without a real target.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
