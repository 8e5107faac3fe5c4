use super::RemoteStore;
use crate::error::{RecipeError, Result};
use crate::model::{Record, RecordId, RecordPayload};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    records: Vec<Record>,
    calls: usize,
    simulate_read_error: bool,
    simulate_write_error: bool,
    simulate_delete_error: bool,
}

/// In-memory store for testing and development.
/// Does NOT persist data.
///
/// Behaves like a well-mannered REST endpoint: ids are assigned on create, order is
/// insertion order, unknown ids are errors. Each kind of call can be switched to
/// fail so callers can exercise their error paths.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `records` already stored, assigning ids to any that lack one.
    pub fn with_records(records: Vec<Record>) -> Self {
        let store = Self::new();
        store.inner().records = records
            .into_iter()
            .map(|mut r| {
                r.id.get_or_insert_with(new_id);
                r
            })
            .collect();
        store
    }

    /// Snapshot of what the store currently holds.
    pub fn records(&self) -> Vec<Record> {
        self.inner().records.clone()
    }

    /// Number of calls received, failed ones included.
    pub fn calls(&self) -> usize {
        self.inner().calls
    }

    /// Make `list` fail.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.inner().simulate_read_error = simulate;
    }

    /// Make `create` and `update` fail.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.inner().simulate_write_error = simulate;
    }

    /// Make `delete` fail.
    pub fn set_simulate_delete_error(&self, simulate: bool) {
        self.inner().simulate_delete_error = simulate;
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn new_id() -> RecordId {
    RecordId::new(Uuid::new_v4().simple().to_string())
}

fn simulated(what: &str) -> RecipeError {
    RecipeError::Store(format!("Simulated {} error", what))
}

#[async_trait]
impl RemoteStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Record>> {
        let mut inner = self.inner();
        inner.calls += 1;
        if inner.simulate_read_error {
            return Err(simulated("read"));
        }
        Ok(inner.records.clone())
    }

    async fn create(&self, payload: &RecordPayload) -> Result<Record> {
        let mut inner = self.inner();
        inner.calls += 1;
        if inner.simulate_write_error {
            return Err(simulated("write"));
        }
        let record = payload.clone().into_record(new_id());
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &RecordId, payload: &RecordPayload) -> Result<Record> {
        let mut inner = self.inner();
        inner.calls += 1;
        if inner.simulate_write_error {
            return Err(simulated("write"));
        }
        let slot = inner
            .records
            .iter_mut()
            .find(|r| r.has_id(id))
            .ok_or_else(|| RecipeError::RecordNotFound(id.clone()))?;
        *slot = payload.clone().into_record(id.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        let mut inner = self.inner();
        inner.calls += 1;
        if inner.simulate_delete_error {
            return Err(simulated("delete"));
        }
        let before = inner.records.len();
        inner.records.retain(|r| !r.has_id(id));
        if inner.records.len() == before {
            return Err(RecipeError::RecordNotFound(id.clone()));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// The two-recipe collection used throughout the engine tests.
    pub fn soup_and_salad() -> Vec<Record> {
        vec![
            Record::new("Soup", "Carrot, Water").with_id("1"),
            Record::new("Salad", "Lettuce, Tomato").with_id("2"),
        ]
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_recipes(self, count: usize) -> Self {
            {
                let mut inner = self.store.inner();
                for i in 0..count {
                    inner.records.push(
                        Record::new(
                            format!("Recipe {}", i + 1),
                            format!("Ingredient {}", i + 1),
                        )
                        .with_id(format!("r{}", i + 1)),
                    );
                }
            }
            self
        }

        pub fn with_recipe(self, record: Record) -> Self {
            self.store.inner().records.push(record);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(recipe: &str, ingredients: &str) -> RecordPayload {
        RecordPayload {
            recipe: recipe.into(),
            ingredients: ingredients.into(),
            cuisine: String::new(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_appends() {
        let store = InMemoryStore::with_records(fixtures::soup_and_salad());
        let created = store.create(&payload("Cake", "Flour")).await.unwrap();
        assert!(created.id.is_some());
        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[2], created);
    }

    #[tokio::test]
    async fn update_unknown_id_fails() {
        let store = InMemoryStore::new();
        let err = store
            .update(&RecordId::new("nope"), &payload("A", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, RecipeError::RecordNotFound(_)));
    }

    #[tokio::test]
    async fn simulated_errors_count_as_calls() {
        let store = fixtures::StoreFixture::new().with_recipes(2).store;
        store.set_simulate_read_error(true);
        assert!(store.list().await.is_err());
        store.set_simulate_delete_error(true);
        assert!(store.delete(&RecordId::new("r1")).await.is_err());
        assert_eq!(store.calls(), 2);
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn with_records_fills_missing_ids() {
        let store = InMemoryStore::with_records(vec![Record::new("A", "b")]);
        assert!(store.records()[0].id.is_some());
    }
}
