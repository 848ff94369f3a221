//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic catalog engine** for media titles. It keeps an
//! authoritative catalog and a filtered, sorted view of it, and the terminal
//! client shipped alongside it is only one way to drive it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the current CatalogState and the id source          │
//! │  - Normalizes inputs, swaps in accepted states              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transition Layer (commands/*.rs)                           │
//! │  - initialize, add, remove, filter, sort                    │
//! │  - Borrow the prior state, return the next one              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Components (ids.rs, filters.rs, sorting.rs)                │
//! │  - Id generation, filter extraction, stable sorting         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State, Not a Store
//!
//! There is no shared mutable store. A [`state::CatalogState`] is a value: a
//! transition reads one and produces another, and a rejected intent produces
//! nothing, so the held state is never half-updated. The state's fields are
//! only writable inside this crate; clients read snapshots.
//!
//! The catalog holds at most [`state::MAX_ITEMS`] titles, and ids are unique
//! within it for as long as it is loaded.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr. Rejections are typed
//! [`error::ShelfError`] values; how to show them is up to the client.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: The five transitions
//! - [`state`]: The catalog state and its read-only accessors
//! - [`model`]: Core data types (`TitleRecord`, `Category`, `Filter`, `SortOption`)
//! - [`ids`]: Id sources and collision handling
//! - [`filters`]: Filter extraction and application
//! - [`sorting`]: The stable sort comparator
//! - [`seed`]: Seed document loading
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering, sessions and logging for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod ids;
pub mod model;
pub mod seed;
pub mod sorting;
pub mod state;
