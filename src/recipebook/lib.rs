//! # Recipebook Architecture
//!
//! Recipebook is a **UI-agnostic client library** for a recipe collection stored behind a
//! REST endpoint. The bundled CLI is one client of it; a GUI or TUI would be another.
//!
//! It keeps two things coherent across asynchronous remote calls:
//! - the **collection**: a local mirror of what the remote store holds, and
//! - the **view**: the part of the collection matching the current search term.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints tables and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - RecipeBook<S>: owns the store and the session state      │
//! │  - The only way to change state                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load / submit / delete / edit / search                   │
//! │  - Catch remote failures; apply confirmed outcomes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//! ┌───────────────────────────┐ ┌───────────────────────────────┐
//! │  State (state.rs)         │ │  Store Layer (store/)         │
//! │  - collection, draft,     │ │  - RemoteStore trait          │
//! │    error, search term     │ │  - HttpStore, InMemoryStore   │
//! │  - view = project(...)    │ │                               │
//! └───────────────────────────┘ └───────────────────────────────┘
//! ```
//!
//! ## Key Principle: The View Is Derived
//!
//! The visible listing is never edited directly. [`view::project`] recomputes it from
//! the collection and the search term after every change to either.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** and **state**: unit tests against `InMemoryStore`, which can be told
//!    to fail any kind of call.
//! 2. **HttpStore**: integration tests against a local axum server (`tests/`).
//! 3. **CLI**: `assert_cmd` tests of the binary against the same server.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per engine operation
//! - [`state`]: Session state and the single place results are applied
//! - [`view`]: Search projection
//! - [`draft`]: The create/edit buffer and its validation
//! - [`model`]: `Record` and its wire format
//! - [`store`]: Remote store abstraction and implementations
//! - [`config`]: Client configuration
//! - [`logging`]: Subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;
pub mod view;
