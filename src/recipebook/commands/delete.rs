use crate::commands::{CmdMessage, CmdResult};
use crate::model::RecordId;
use crate::state::{Outcome, SyncState};
use crate::store::RemoteStore;
use tracing::{error, info};

pub async fn run<S: RemoteStore>(store: &S, state: &mut SyncState, id: &RecordId) -> CmdResult {
    let mut result = CmdResult::default();

    match store.delete(id).await {
        Ok(()) => {
            info!(%id, "recipe deleted");
            let removed = state.find(id).cloned();
            state.apply(Outcome::Deleted(id.clone()));
            if let Some(record) = removed {
                result.add_message(CmdMessage::success(format!(
                    "Recipe deleted: {}",
                    record.recipe
                )));
                result.affected.push(record);
            }
        }
        Err(e) => {
            error!(%id, error = %e, "There was an error deleting the data");
        }
    }

    result.with_listed(state.view().to_vec())
}
