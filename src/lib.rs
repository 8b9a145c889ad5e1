#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pattern Recipe
//!
//! > **Classic object-oriented design patterns, rewritten as idiomatic Rust.**
//!
//! This crate shows two patterns from the classic catalogue, each as a small,
//! self-contained module with a demo:
//!
//! - **Command**: a text editor whose document only changes through reversible
//!   commands, giving linear undo/redo.
//! - **State**: a TCP-like connection whose `open`/`close`/`acknowledge` behavior
//!   depends entirely on the state it is in.
//!
//! The two modules never talk to each other.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Enums over class hierarchies
//! The textbook versions use an abstract base class with one subclass per command
//! or state. Both sets here are closed and small, so they are enums, and every
//! operation is a single `match`. Adding a variant makes the compiler point at
//! each place that has to handle it.
//!
//! ### One owner for the document
//! Textbook commands keep a pointer to the document they edit. Here a command
//! gets `&mut Document` only while it is being applied or reverted, so the
//! editor is the single owner and there is no aliasing to reason about.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each module defines its own error type with `thiserror` (e.g. [`EditorError`](editor::EditorError)).
//! Out-of-range edits abort the single operation and leave the document untouched.
//! State machine no-ops are *not* errors: they return a [`Report`](connection::Report) like any other call.
//!
//! ### 2. Observability
//! We use `tracing` with structured fields. Every executed, undone or redone command and
//! every connection operation emits an event. See [`runtime::setup_tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Generic undo/redo bookkeeping, written once.
//! - **Key items**: [`Reversible`](framework::Reversible), [`History`](framework::History).
//!
//! ### 2. The Command Pattern ([`editor`])
//! - **Role**: A concrete command set and the editor that runs it.
//! - **Key items**: [`Document`](editor::Document), [`EditCommand`](editor::EditCommand), [`TextEditor`](editor::TextEditor).
//!
//! ### 3. The State Pattern ([`connection`])
//! - **Role**: A transition table and the context object that consults it.
//! - **Key items**: [`ConnectionState`](connection::ConnectionState), [`Connection`](connection::Connection).
//!
//! ### 4. The Orchestrator ([`runtime`])
//! - **Role**: Logging setup and the demo scenarios run by the binary.
//!
//! ## 🚀 Quick Start
//!
//! ### Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod connection;
pub mod editor;
pub mod framework;
pub mod runtime;
