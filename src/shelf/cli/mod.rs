//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation of `shelf`.
//!
//! ## One Catalog Per Run
//!
//! Nothing is persisted. Every invocation loads the seed document, applies the
//! requested intents to that fresh catalog and prints the result. Chains of
//! intents against one catalog go through `shelf session`, which reads them
//! line by line.
//!
//! `shelf` with no subcommand is `shelf list`.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (columns, colors, messages)
//! - `session`: Line-by-line intent scripts
//! - `setup`: Argument parsing via clap
//! - `logging`: `tracing` subscriber setup

mod commands;
mod logging;
mod render;
mod session;
pub mod setup;

pub use commands::run;
