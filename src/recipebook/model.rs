//! # Domain Model
//!
//! A [`Record`] is one recipe as the remote store knows it. The wire format is the
//! store's JSON document:
//!
//! ```text
//! { "_id": "65f0c0…", "recipe": "Soup", "ingredients": "Carrot, Water", "cuisine": "French" }
//! ```
//!
//! - `_id` is assigned by the store and is opaque to us. Records that were never
//!   saved have no id.
//! - `cuisine` may be missing or `null` in responses.
//!
//! Requests carry a [`RecordPayload`] instead: the three editable fields and never an
//! id (the id travels in the URL for updates).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub recipe: String,
    pub ingredients: String,
    #[serde(default)]
    pub cuisine: Option<String>,
}

impl Record {
    pub fn new(recipe: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            id: None,
            recipe: recipe.into(),
            ingredients: ingredients.into(),
            cuisine: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// True when this record carries the given id.
    pub fn has_id(&self, id: &RecordId) -> bool {
        self.id.as_ref() == Some(id)
    }

    pub fn cuisine_or_empty(&self) -> &str {
        self.cuisine.as_deref().unwrap_or("")
    }
}

/// Request body for create and update calls.
///
/// `cuisine` is always sent, as an empty string when the user left it blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayload {
    pub recipe: String,
    pub ingredients: String,
    #[serde(default)]
    pub cuisine: String,
}

impl RecordPayload {
    /// Materialize the payload as a stored record under `id`.
    pub fn into_record(self, id: RecordId) -> Record {
        Record {
            id: Some(id),
            recipe: self.recipe,
            ingredients: self.ingredients,
            cuisine: Some(self.cuisine),
        }
    }
}
