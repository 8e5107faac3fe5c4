//! # The Draft Slot
//!
//! There is exactly one editable buffer. It is either creating a new recipe or editing
//! an existing one, never both:
//!
//! ```text
//!            begin_edit(id)             submit ok
//!   Create ───────────────▶ Edit(id) ───────────▶ Create
//!     │ ▲                     │ ▲
//!     └─┘ submit ok/failed    └─┘ submit failed (kept for retry)
//! ```
//!
//! A failed submit leaves every field as typed so the user can retry.

use crate::error::{RecipeError, Result};
use crate::model::{Record, RecordId, RecordPayload};

pub const VALIDATION_MESSAGE: &str = "Recipe and Ingredients are required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit(RecordId),
}

impl DraftMode {
    pub fn title(&self) -> &'static str {
        match self {
            DraftMode::Create => "Add New Recipe",
            DraftMode::Edit(_) => "Edit Recipe",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            DraftMode::Create => "Add Recipe",
            DraftMode::Edit(_) => "Update Recipe",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub recipe: String,
    pub ingredients: String,
    pub cuisine: String,
    target: Option<RecordId>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a stored record into an edit draft.
    ///
    /// Records without an id cannot be addressed by an update, so they produce a
    /// create draft carrying the same fields.
    pub fn from_record(record: &Record) -> Self {
        Self {
            recipe: record.recipe.clone(),
            ingredients: record.ingredients.clone(),
            cuisine: record.cuisine_or_empty().to_string(),
            target: record.id.clone(),
        }
    }

    pub fn target(&self) -> Option<&RecordId> {
        self.target.as_ref()
    }

    pub fn mode(&self) -> DraftMode {
        match &self.target {
            Some(id) => DraftMode::Edit(id.clone()),
            None => DraftMode::Create,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check required fields and build the request body.
    ///
    /// Fields are sent as typed; trimming only decides emptiness.
    pub fn validate(&self) -> Result<RecordPayload> {
        if self.recipe.trim().is_empty() || self.ingredients.trim().is_empty() {
            return Err(RecipeError::Validation(VALIDATION_MESSAGE));
        }
        Ok(RecordPayload {
            recipe: self.recipe.clone(),
            ingredients: self.ingredients.clone(),
            cuisine: self.cuisine.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
