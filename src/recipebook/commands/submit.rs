use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RecipeError, Result};
use crate::model::{Record, RecordId};
use crate::state::{Outcome, SyncState};
use crate::store::RemoteStore;
use tracing::{error, info};

pub const SAVE_FAILED_MESSAGE: &str = "An error occurred while saving data.";

/// Send the draft to the store: a create when the draft has no target, an update of
/// the target otherwise.
pub async fn run<S: RemoteStore>(store: &S, state: &mut SyncState) -> CmdResult {
    let payload = match state.draft().validate() {
        Ok(payload) => payload,
        Err(e) => return reject(state, e.to_string()),
    };
    let target = state.draft().target().cloned();

    let saved = match &target {
        Some(id) => store
            .update(id, &payload)
            .await
            .map(|record| keep_target_id(record, id)),
        None => store.create(&payload).await.and_then(require_id),
    };

    match saved {
        Ok(record) => {
            let verb = if target.is_some() { "updated" } else { "added" };
            info!(id = ?record.id, "recipe {}", verb);
            state.apply(Outcome::Saved {
                target,
                record: record.clone(),
            });
            let mut result = CmdResult::default()
                .with_affected(vec![record.clone()])
                .with_listed(state.view().to_vec());
            result.add_message(CmdMessage::success(format!(
                "Recipe {}: {}",
                verb, record.recipe
            )));
            result
        }
        Err(e) => {
            error!(error = %e, "There was an error saving the data");
            reject(state, SAVE_FAILED_MESSAGE.to_string())
        }
    }
}

fn reject(state: &mut SyncState, message: String) -> CmdResult {
    state.apply(Outcome::Rejected(message.clone()));
    let mut result = CmdResult::default().with_listed(state.view().to_vec());
    result.add_message(CmdMessage::error(message));
    result
}

// An update response without `_id` still belongs at the target's position.
fn keep_target_id(mut record: Record, target: &RecordId) -> Record {
    record.id.get_or_insert_with(|| target.clone());
    record
}

fn require_id(record: Record) -> Result<Record> {
    match record.id {
        Some(_) => Ok(record),
        None => Err(RecipeError::Api(
            "created recipe came back without an id".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{edit, load};
    use crate::draft::VALIDATION_MESSAGE;
    use crate::model::RecordPayload;
    use crate::store::memory::fixtures::soup_and_salad;
    use crate::store::memory::InMemoryStore;
    use async_trait::async_trait;

    async fn loaded(store: &InMemoryStore) -> SyncState {
        let mut state = SyncState::new();
        load::run(store, &mut state).await;
        state
    }

    fn fill(state: &mut SyncState, recipe: &str, ingredients: &str, cuisine: &str) {
        let draft = state.draft_mut();
        draft.recipe = recipe.into();
        draft.ingredients = ingredients.into();
        draft.cuisine = cuisine.into();
    }

    #[tokio::test]
    async fn create_appends_server_record_and_clears_draft() {
        let store = InMemoryStore::with_records(soup_and_salad());
        let mut state = loaded(&store).await;
        fill(&mut state, "Cake", "Flour, Carrot", "");

        let result = run(&store, &mut state).await;

        assert_eq!(state.records().len(), 3);
        let created = state.records().last().unwrap();
        assert_eq!(created.recipe, "Cake");
        assert!(created.id.is_some());
        assert_eq!(created, &store.records()[2]);
        assert!(state.draft().is_empty());
        assert_eq!(state.error(), None);
        assert_eq!(result.affected.len(), 1);
        assert!(result.messages[0].content.contains("Recipe added: Cake"));
    }

    #[tokio::test]
    async fn update_replaces_in_place_and_leaves_edit_mode() {
        let store = InMemoryStore::with_records(soup_and_salad());
        let mut state = loaded(&store).await;
        edit::begin(&mut state, &"1".into());
        state.draft_mut().recipe = "Carrot Soup".into();

        run(&store, &mut state).await;

        assert_eq!(state.records()[0].recipe, "Carrot Soup");
        assert_eq!(state.records()[0].id, Some("1".into()));
        assert_eq!(state.records()[1], soup_and_salad()[1]);
        assert!(!state.draft().is_editing());
        assert!(state.draft().is_empty());
    }

    #[tokio::test]
    async fn blank_fields_never_reach_the_store() {
        let store = InMemoryStore::with_records(soup_and_salad());
        let mut state = loaded(&store).await;
        let calls = store.calls();
        fill(&mut state, "Cake", "  ", "");

        let result = run(&store, &mut state).await;

        assert_eq!(store.calls(), calls);
        assert_eq!(state.error(), Some(VALIDATION_MESSAGE));
        assert!(result.has_errors());
        assert_eq!(state.draft().recipe, "Cake");
    }

    #[tokio::test]
    async fn failed_create_keeps_collection_and_draft() {
        let store = InMemoryStore::with_records(soup_and_salad());
        let mut state = loaded(&store).await;
        fill(&mut state, "Cake", "Flour", "French");
        store.set_simulate_write_error(true);

        run(&store, &mut state).await;

        assert_eq!(state.records(), soup_and_salad().as_slice());
        assert_eq!(state.error(), Some(SAVE_FAILED_MESSAGE));
        assert_eq!(state.draft().recipe, "Cake");
        assert_eq!(state.draft().cuisine, "French");
        assert!(!state.draft().is_editing());
    }

    #[tokio::test]
    async fn failed_update_stays_in_edit_mode_and_retry_succeeds() {
        let store = InMemoryStore::with_records(soup_and_salad());
        let mut state = loaded(&store).await;
        edit::begin(&mut state, &"2".into());
        state.draft_mut().ingredients = "Lettuce".into();
        store.set_simulate_write_error(true);

        run(&store, &mut state).await;
        assert_eq!(state.records(), soup_and_salad().as_slice());
        assert_eq!(state.draft().target(), Some(&"2".into()));
        assert_eq!(state.draft().ingredients, "Lettuce");

        store.set_simulate_write_error(false);
        run(&store, &mut state).await;
        assert_eq!(state.records()[1].ingredients, "Lettuce");
        assert_eq!(state.error(), None);
        assert!(state.draft().is_empty());
    }

    #[tokio::test]
    async fn scenario_edit_then_blank_ingredients() {
        let store = InMemoryStore::with_records(soup_and_salad());
        let mut state = loaded(&store).await;
        state.set_search_term("carrot".into());
        assert_eq!(state.view().len(), 1);

        edit::begin(&mut state, &"1".into());
        state.draft_mut().ingredients = String::new();
        run(&store, &mut state).await;

        assert_eq!(state.error(), Some(VALIDATION_MESSAGE));
        assert_eq!(state.records(), soup_and_salad().as_slice());
        assert!(state.draft().is_editing());
    }

    /// Store whose writes answer with documents lacking `_id`.
    struct AnonymousStore;

    #[async_trait]
    impl RemoteStore for AnonymousStore {
        async fn list(&self) -> Result<Vec<Record>> {
            Ok(soup_and_salad())
        }

        async fn create(&self, payload: &RecordPayload) -> Result<Record> {
            Ok(Record::new(payload.recipe.clone(), payload.ingredients.clone()))
        }

        async fn update(&self, _id: &RecordId, payload: &RecordPayload) -> Result<Record> {
            Ok(Record::new(payload.recipe.clone(), payload.ingredients.clone()))
        }

        async fn delete(&self, _id: &RecordId) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn create_without_id_is_a_save_failure() {
        let mut state = SyncState::new();
        load::run(&AnonymousStore, &mut state).await;
        fill(&mut state, "Cake", "Flour", "");

        run(&AnonymousStore, &mut state).await;

        assert_eq!(state.records().len(), 2);
        assert_eq!(state.error(), Some(SAVE_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn update_without_id_keeps_target_id() {
        let mut state = SyncState::new();
        load::run(&AnonymousStore, &mut state).await;
        edit::begin(&mut state, &"2".into());

        run(&AnonymousStore, &mut state).await;

        assert_eq!(state.records()[1].id, Some("2".into()));
        assert_eq!(state.records()[1].recipe, "Salad");
    }
}
