use crate::commands::CmdResult;
use crate::state::{Outcome, SyncState};
use crate::store::RemoteStore;
use tracing::{error, info};

pub async fn run<S: RemoteStore>(store: &S, state: &mut SyncState) -> CmdResult {
    match store.list().await {
        Ok(records) => {
            info!(count = records.len(), "recipes loaded");
            state.apply(Outcome::Loaded(records));
        }
        Err(e) => {
            error!(error = %e, "There was an error fetching the data");
        }
    }
    CmdResult::default().with_listed(state.view().to_vec())
}
