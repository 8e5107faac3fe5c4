//! # API Facade
//!
//! [`RecipeBook`] is the single entry point for a session. It owns the remote store
//! and the [`SyncState`], and it is the only way to change that state.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the command modules
//! - **Exposes read access** to the collection, view, draft and error
//! - **Binds form input** (draft fields, search term) with immediate view refresh
//!
//! Every operation takes `&mut self`. An async operation keeps that borrow until its
//! remote call has finished and its result has been applied, so completions cannot
//! interleave.
//!
//! ## Generic Over RemoteStore
//!
//! - Production: `RecipeBook<HttpStore>`
//! - Testing: `RecipeBook<InMemoryStore>`

use crate::commands;
use crate::draft::{Draft, DraftMode};
use crate::model::{Record, RecordId};
use crate::state::SyncState;
use crate::store::RemoteStore;

pub struct RecipeBook<S: RemoteStore> {
    store: S,
    state: SyncState,
}

impl<S: RemoteStore> RecipeBook<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: SyncState::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    /// Records to display: the collection filtered by the search term.
    pub fn view(&self) -> &[Record] {
        self.state.view()
    }

    pub fn records(&self) -> &[Record] {
        self.state.records()
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.state.find(id)
    }

    pub fn draft(&self) -> &Draft {
        self.state.draft()
    }

    pub fn draft_mode(&self) -> DraftMode {
        self.state.draft().mode()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub async fn load(&mut self) -> commands::CmdResult {
        commands::load::run(&self.store, &mut self.state).await
    }

    /// Create or update from the draft, depending on [`DraftMode`].
    pub async fn submit(&mut self) -> commands::CmdResult {
        commands::submit::run(&self.store, &mut self.state).await
    }

    pub async fn delete(&mut self, id: &RecordId) -> commands::CmdResult {
        commands::delete::run(&self.store, &mut self.state, id).await
    }

    pub fn begin_edit(&mut self, id: &RecordId) -> commands::CmdResult {
        commands::edit::begin(&mut self.state, id)
    }

    pub fn discard_draft(&mut self) -> commands::CmdResult {
        commands::edit::discard(&mut self.state)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> commands::CmdResult {
        commands::search::run(&mut self.state, term)
    }

    pub fn set_recipe(&mut self, recipe: impl Into<String>) {
        self.state.draft_mut().recipe = recipe.into();
    }

    pub fn set_ingredients(&mut self, ingredients: impl Into<String>) {
        self.state.draft_mut().ingredients = ingredients.into();
    }

    pub fn set_cuisine(&mut self, cuisine: impl Into<String>) {
        self.state.draft_mut().cuisine = cuisine.into();
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
