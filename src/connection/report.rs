//! Operations on a connection and the reports they produce.

use super::state::ConnectionState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The operations every connection state must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Open,
    Close,
    Acknowledge,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Open, Operation::Close, Operation::Acknowledge];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Open => "open",
            Operation::Close => "close",
            Operation::Acknowledge => "acknowledge",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an operation reported, one variant per cell of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    Opening,
    AlreadyOpen,
    Closing,
    AlreadyClosed,
    Acknowledging,
    AcknowledgingData,
    CannotAcknowledge,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Opening => "opening",
            Notice::AlreadyOpen => "already open",
            Notice::Closing => "closing",
            Notice::AlreadyClosed => "already closed",
            Notice::Acknowledging => "acknowledging",
            Notice::AcknowledgingData => "acknowledging data",
            Notice::CannotAcknowledge => "cannot acknowledge",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The observable outcome of one operation.
///
/// `from == to` means the operation was valid but had no effect in that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub operation: Operation,
    pub from: ConnectionState,
    pub to: ConnectionState,
    pub notice: Notice,
}

impl Report {
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.notice) {
            (ConnectionState::Listening, Notice::AlreadyOpen) => {
                f.write_str("Connection is already open and listening.")
            }
            (ConnectionState::Listening, Notice::Closing) => {
                f.write_str("Closing connection from listening state.")
            }
            (ConnectionState::Listening, Notice::Acknowledging) => {
                f.write_str("Acknowledging connection from listening state.")
            }
            (_, Notice::Opening) => f.write_str("Opening connection."),
            (_, Notice::AlreadyOpen) => f.write_str("Connection is already open."),
            (_, Notice::Closing) => f.write_str("Closing connection."),
            (_, Notice::AlreadyClosed) => f.write_str("Connection is already closed."),
            (_, Notice::Acknowledging) => f.write_str("Acknowledging connection."),
            (_, Notice::AcknowledgingData) => f.write_str("Acknowledging data on connection."),
            (_, Notice::CannotAcknowledge) => {
                f.write_str("Cannot acknowledge, connection is closed.")
            }
        }
    }
}
