//! Runtime plumbing shared by the demo binary.
//!
//! This module contains:
//!
//! - **Observability setup**: Initializing tracing and logging
//! - **Demo orchestration**: Running each pattern's scenario end to end
//!
//! # Main Components
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//! - [`run_editor_demo`] - The undo/redo editor scenario
//! - [`run_connection_demo`] - The connection state machine scenario

pub mod demo;
pub mod tracing;

pub use self::demo::*;
pub use self::tracing::setup_tracing;
