//! # Command Layer
//!
//! One module per operation of the sync engine. Commands take the store and the
//! session state explicitly and return a [`CmdResult`]; they never print.
//!
//! ## Failure Policy
//!
//! Remote failures stop here. No command that talks to the store returns an `Err`:
//!
//! - [`submit`] turns a failed create/update into the session's error message
//!   and keeps the draft for a retry.
//! - [`load`] and [`delete`] log the failure and leave the collection as it was.
//!   The user sees no error; reloading is the recovery.
//!
//! Only [`config`] returns `Result`, since it does local file I/O.
//!
//! ## Single Writer
//!
//! Every command holds `&mut SyncState` for its whole run, remote call included, and
//! hands the confirmed result to [`SyncState::apply`](crate::state::SyncState). Two
//! operations can therefore never interleave their updates.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` with its failure switches. This is where most
//! of the behavioural testing lives.
//!
//! ## Command Modules
//!
//! - [`load`]: Replace the collection from the store
//! - [`submit`]: Create or update from the draft
//! - [`delete`]: Remove a record
//! - [`edit`]: Move a record into the draft, or discard the draft
//! - [`search`]: Change the search term
//! - [`config`]: Show and change client configuration

use crate::config::RecipeConfig;
use crate::model::Record;
use serde::Serialize;

pub mod config;
pub mod delete;
pub mod edit;
pub mod load;
pub mod search;
pub mod submit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records written or removed by the operation
    pub affected: Vec<Record>,
    /// The derived view after the operation
    pub listed: Vec<Record>,
    pub messages: Vec<CmdMessage>,
    pub config: Option<RecipeConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<Record>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<Record>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_config(mut self, config: RecipeConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
