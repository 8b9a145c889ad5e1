//! Connection states and the transition table.

use super::report::{Notice, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The state a [`Connection`](super::Connection) is in.
///
/// There is no terminal state: every state can be left again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// Initial state.
    #[default]
    Closed,
    Listening,
    Open,
}

impl ConnectionState {
    pub const ALL: [ConnectionState; 3] = [
        ConnectionState::Closed,
        ConnectionState::Listening,
        ConnectionState::Open,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConnectionState::Closed => "closed",
            ConnectionState::Listening => "listening",
            ConnectionState::Open => "open",
        }
    }

    /// Looks up `operation` in the transition table.
    ///
    /// Returns the next state (equal to `self` for a no-op) and what to report.
    ///
    /// | State     | open                 | close                | acknowledge                |
    /// |-----------|----------------------|----------------------|----------------------------|
    /// | Closed    | Listening, Opening   | no-op, AlreadyClosed | no-op, CannotAcknowledge   |
    /// | Listening | no-op, AlreadyOpen   | Closed, Closing      | Open, Acknowledging        |
    /// | Open      | no-op, AlreadyOpen   | Closed, Closing      | no-op, AcknowledgingData   |
    pub fn on(self, operation: Operation) -> (ConnectionState, Notice) {
        use ConnectionState as S;
        use Operation as Op;

        match (self, operation) {
            (S::Closed, Op::Open) => (S::Listening, Notice::Opening),
            (S::Closed, Op::Close) => (S::Closed, Notice::AlreadyClosed),
            (S::Closed, Op::Acknowledge) => (S::Closed, Notice::CannotAcknowledge),

            (S::Listening, Op::Open) => (S::Listening, Notice::AlreadyOpen),
            (S::Listening, Op::Close) => (S::Closed, Notice::Closing),
            (S::Listening, Op::Acknowledge) => (S::Open, Notice::Acknowledging),

            (S::Open, Op::Open) => (S::Open, Notice::AlreadyOpen),
            (S::Open, Op::Close) => (S::Closed, Notice::Closing),
            (S::Open, Op::Acknowledge) => (S::Open, Notice::AcknowledgingData),
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
