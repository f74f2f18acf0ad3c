//! # Duke Architecture
//!
//! Duke is a line-driven task tracker. The library holds everything that has
//! rules (task parsing, the data file format, positions, the error taxonomy);
//! the binary only reads lines and prints what comes back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, repl.rs, print.rs)                  │
//! │  - Reads lines, prints messages, decides exit codes         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the TaskList and its Storage                        │
//! │  - Dispatches a command line, recovers failures             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One module per command, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Tasks (list.rs, model.rs, parser.rs, index.rs)             │
//! │  Storage (store/)                                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//!
//! ## Positions
//!
//! Tasks are addressed by 1-based position in the current list. Positions are
//! recomputed on every command, so they shift after a delete. See `index.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every UI goes through
//! - [`commands`]: per-command logic and the `CmdResult` type
//! - [`list`]: the ordered task collection
//! - [`model`]: task kinds, display and persisted encodings
//! - [`parser`]: command words and argument validation
//! - [`index`]: 1-based positions
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: data directory configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod list;
pub mod model;
pub mod parser;
pub mod store;
