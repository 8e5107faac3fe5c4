//! # Session State
//!
//! [`SyncState`] owns everything a session knows:
//!
//! - the canonical collection (mirror of the remote store),
//! - the search term and the view derived from it,
//! - the draft slot,
//! - the current user-facing error, if any.
//!
//! Nothing outside the crate can mutate it. Remote results reach it through exactly
//! one door, [`SyncState::apply`], which takes an [`Outcome`] describing what the
//! remote store confirmed. Every path that touches the collection or the search term
//! ends with a view refresh, so the view is always `project(records, search_term)`.
//!
//! Collection rules:
//! - `Loaded` replaces everything, in the order the store reported.
//! - `Saved` without a target appends at the end.
//! - `Saved` with a target replaces that entry where it sits.
//! - `Deleted` removes the entry; the rest keep their relative order.

use crate::draft::Draft;
use crate::model::{Record, RecordId};
use crate::view::project;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// A confirmed result to fold into the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The store's full listing.
    Loaded(Vec<Record>),
    /// A create (`target: None`) or update succeeded with `record` as the stored value.
    Saved {
        target: Option<RecordId>,
        record: Record,
    },
    /// The store removed the record with this id.
    Deleted(RecordId),
    /// A submit did not go through; the message is what the user sees.
    Rejected(String),
}

#[derive(Debug, Default)]
pub struct SyncState {
    records: Vec<Record>,
    search_term: String,
    view: Vec<Record>,
    draft: Draft,
    error: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical collection.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The derived view for the current search term.
    pub fn view(&self) -> &[Record] {
        &self.view
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// When the collection was last replaced by a successful load.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.has_id(id))
    }

    pub(crate) fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.refresh_view();
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Loaded(records) => {
                debug!(count = records.len(), "replacing collection");
                self.records = records;
                self.loaded_at = Some(Utc::now());
            }
            Outcome::Saved {
                target: None,
                record,
            } => {
                self.insert(record);
                self.draft.clear();
                self.error = None;
            }
            Outcome::Saved {
                target: Some(id),
                record,
            } => {
                match self.position(&id) {
                    Some(pos) => self.records[pos] = record,
                    None => warn!(%id, "updated recipe is no longer in the collection"),
                }
                self.draft.clear();
                self.error = None;
            }
            Outcome::Deleted(id) => {
                self.records.retain(|r| !r.has_id(&id));
            }
            Outcome::Rejected(message) => {
                self.error = Some(message);
                return;
            }
        }
        self.refresh_view();
    }

    fn insert(&mut self, record: Record) {
        // Keep ids unique even if the store hands back one we already hold.
        let existing = record.id.as_ref().and_then(|id| self.position(id));
        match existing {
            Some(pos) => {
                debug!(id = ?record.id, "created recipe already present, replacing");
                self.records[pos] = record;
            }
            None => self.records.push(record),
        }
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.has_id(id))
    }

    fn refresh_view(&mut self) {
        self.view = project(&self.records, &self.search_term);
    }
}
