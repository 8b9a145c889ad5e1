//! The connection context that delegates to its current state.

use super::report::{Operation, Report};
use super::state::ConnectionState;
use tracing::info;

/// A connection whose behavior is decided by the state it holds.
///
/// # Usage
/// ```
/// use pattern_recipe::connection::{Connection, ConnectionState, Notice};
///
/// let mut connection = Connection::new();
/// assert_eq!(connection.open().notice, Notice::Opening);
/// assert_eq!(connection.state(), ConnectionState::Listening);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connection {
    state: ConnectionState,
}

impl Connection {
    /// Creates a connection in the `Closed` state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn open(&mut self) -> Report {
        self.dispatch(Operation::Open)
    }

    pub fn close(&mut self) -> Report {
        self.dispatch(Operation::Close)
    }

    pub fn acknowledge(&mut self) -> Report {
        self.dispatch(Operation::Acknowledge)
    }

    /// Runs `operation` against the current state and moves to the next one.
    pub fn dispatch(&mut self, operation: Operation) -> Report {
        let from = self.state;
        let (to, notice) = from.on(operation);
        self.state = to;

        let report = Report {
            operation,
            from,
            to,
            notice,
        };
        if report.changed_state() {
            info!(%operation, %from, %to, %notice, "Transition");
        } else {
            info!(%operation, state = %from, %notice, "No-op");
        }
        report
    }
}
