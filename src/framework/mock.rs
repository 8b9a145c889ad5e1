//! # Mock Framework
//!
//! Utilities for testing a [`History`](crate::framework::History) in isolation.
//!
//! [`MockCommand`] targets a plain `Vec<String>` journal: every apply or revert
//! appends a line such as `"apply a"` or `"revert a"`, so a test can assert the
//! exact order in which the engine drove its commands.
//!
//! It can also be scripted to fail, which is the only way to reach the
//! engine's error paths with commands that otherwise never fail.
//!
//! This module is public instead of `#[cfg(test)]` so it works with integration tests.
//!
//! # Example
//! ```
//! use pattern_recipe::framework::History;
//! use pattern_recipe::framework::mock::MockCommand;
//!
//! let mut journal = Vec::new();
//! let mut history = History::new();
//! history.execute(MockCommand::new("a"), &mut journal).unwrap();
//! history.undo(&mut journal).unwrap();
//! assert_eq!(journal, vec!["apply a", "revert a"]);
//! ```

use crate::framework::Reversible;
use thiserror::Error;

/// Error returned by a [`MockCommand`] scripted to fail.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MockError {
    #[error("Mock apply failed: {0}")]
    Apply(String),
    #[error("Mock revert failed: {0}")]
    Revert(String),
}

/// A command that records what the engine asked it to do.
#[derive(Debug, Clone, PartialEq)]
pub struct MockCommand {
    label: String,
    fail_apply: bool,
    fail_revert: bool,
}

impl MockCommand {
    /// Creates a command that always succeeds.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fail_apply: false,
            fail_revert: false,
        }
    }

    /// Makes every `apply` fail without touching the journal.
    pub fn failing_apply(mut self) -> Self {
        self.fail_apply = true;
        self
    }

    /// Makes every `revert` fail without touching the journal.
    pub fn failing_revert(mut self) -> Self {
        self.fail_revert = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Reversible for MockCommand {
    type Target = Vec<String>;
    type Error = MockError;

    fn apply(&mut self, journal: &mut Vec<String>) -> Result<(), MockError> {
        if self.fail_apply {
            return Err(MockError::Apply(self.label.clone()));
        }
        journal.push(format!("apply {}", self.label));
        Ok(())
    }

    fn revert(&mut self, journal: &mut Vec<String>) -> Result<(), MockError> {
        if self.fail_revert {
            return Err(MockError::Revert(self.label.clone()));
        }
        journal.push(format!("revert {}", self.label));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_command_records_calls() {
        let mut journal = Vec::new();
        let mut command = MockCommand::new("x");

        command.apply(&mut journal).unwrap();
        command.revert(&mut journal).unwrap();

        assert_eq!(journal, vec!["apply x", "revert x"]);
    }

    #[test]
    fn test_scripted_failures() {
        let mut journal = Vec::new();

        let mut command = MockCommand::new("x").failing_apply();
        assert_eq!(command.apply(&mut journal), Err(MockError::Apply("x".into())));

        let mut command = MockCommand::new("y").failing_revert();
        assert_eq!(command.revert(&mut journal), Err(MockError::Revert("y".into())));

        assert!(journal.is_empty());
    }
}
