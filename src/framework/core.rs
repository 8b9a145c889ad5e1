//! # Core Command Engine
//!
//! This module defines the generic building blocks for undo/redo.
//!
//! ## Key Types
//!
//! - [`Reversible`]: The trait that all command types must implement.
//! - [`History`]: The generic pair of stacks that executes, undoes and redoes commands.

use std::fmt::Debug;
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Reversible commands)
// =============================================================================

/// Trait that any command must implement to be managed by a [`History`].
///
/// # Architecture Note
/// By defining a contract (`Reversible`) that every command type must satisfy,
/// we write the undo/redo bookkeeping *once* in [`History`] and reuse it for any target.
///
/// Commands never hold a reference to the thing they modify. The target is lent
/// to them with `&mut` only for the duration of [`apply`](Reversible::apply) or
/// [`revert`](Reversible::revert), so the target keeps a single owner.
///
/// # Associated Types
/// - `Target`: the value being mutated (e.g. a [`Document`](crate::editor::Document)).
/// - `Error`: the error type returned when a command cannot be applied or reverted.
pub trait Reversible: Debug {
    /// The value this command mutates.
    type Target;

    /// The error returned when the command does not fit the target.
    type Error: std::error::Error;

    /// Performs the command. May capture whatever is needed to revert it later.
    fn apply(&mut self, target: &mut Self::Target) -> Result<(), Self::Error>;

    /// Undoes a previous [`apply`](Reversible::apply).
    fn revert(&mut self, target: &mut Self::Target) -> Result<(), Self::Error>;
}

// =============================================================================
// 2. THE GENERIC HISTORY
// =============================================================================

/// Linear undo/redo history over commands of type `C`.
///
/// `done` holds executed commands, most recent last. `undone` holds commands
/// popped by [`undo`](History::undo), most recently undone last.
///
/// Executing a fresh command clears `undone`: there is no branching redo.
#[derive(Debug, Clone)]
pub struct History<C> {
    done: Vec<C>,
    undone: Vec<C>,
}

impl<C> Default for History<C> {
    fn default() -> Self {
        Self {
            done: Vec::new(),
            undone: Vec::new(),
        }
    }
}

impl<C: Reversible> History<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `command` to `target` and records it.
    ///
    /// On failure the error is returned and both stacks are left untouched.
    pub fn execute(&mut self, mut command: C, target: &mut C::Target) -> Result<(), C::Error> {
        let command_type = command_type::<C>();
        debug!(command_type, ?command, "Execute");

        if let Err(e) = command.apply(target) {
            warn!(command_type, error = %e, "Execute failed");
            return Err(e);
        }

        let dropped = self.undone.len();
        self.undone.clear();
        self.done.push(command);
        info!(command_type, history = self.done.len(), dropped, "Executed");
        Ok(())
    }

    /// Reverts the most recent command.
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self, target: &mut C::Target) -> Result<bool, C::Error> {
        let command_type = command_type::<C>();
        let Some(mut command) = self.done.pop() else {
            debug!(command_type, "Nothing to undo");
            return Ok(false);
        };

        debug!(command_type, ?command, "Undo");
        if let Err(e) = command.revert(target) {
            warn!(command_type, error = %e, "Undo failed");
            self.done.push(command);
            return Err(e);
        }

        self.undone.push(command);
        info!(command_type, history = self.done.len(), redo = self.undone.len(), "Undone");
        Ok(true)
    }

    /// Re-applies the most recently undone command.
    ///
    /// Returns `Ok(false)` when there is nothing to redo.
    pub fn redo(&mut self, target: &mut C::Target) -> Result<bool, C::Error> {
        let command_type = command_type::<C>();
        let Some(mut command) = self.undone.pop() else {
            debug!(command_type, "Nothing to redo");
            return Ok(false);
        };

        debug!(command_type, ?command, "Redo");
        if let Err(e) = command.apply(target) {
            warn!(command_type, error = %e, "Redo failed");
            self.undone.push(command);
            return Err(e);
        }

        self.done.push(command);
        info!(command_type, history = self.done.len(), redo = self.undone.len(), "Redone");
        Ok(true)
    }
}

impl<C> History<C> {
    /// Executed commands, oldest first.
    pub fn done(&self) -> &[C] {
        &self.done
    }

    /// Undone commands, oldest first. The last one is the next to be redone.
    pub fn undone(&self) -> &[C] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Forgets both stacks. The target is not touched.
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }
}

/// Short type name for log fields (e.g. "EditCommand" instead of the full path).
fn command_type<C>() -> &'static str {
    std::any::type_name::<C>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================
