use crate::commands::{CmdMessage, CmdResult};
use crate::draft::Draft;
use crate::model::RecordId;
use crate::state::SyncState;
use tracing::debug;

/// Load the record with `id` into the draft. Unknown ids leave the draft alone; the
/// record may have been deleted since it was displayed.
pub fn begin(state: &mut SyncState, id: &RecordId) -> CmdResult {
    let mut result = CmdResult::default();
    let Some(record) = state.find(id).cloned() else {
        debug!(%id, "edit requested for unknown recipe");
        return result;
    };

    *state.draft_mut() = Draft::from_record(&record);
    result.add_message(CmdMessage::info(format!("Editing: {}", record.recipe)));
    result.with_affected(vec![record])
}

/// Throw the draft away and return to create mode.
pub fn discard(state: &mut SyncState) -> CmdResult {
    state.draft_mut().clear();
    state.clear_error();
    CmdResult::default()
}
