use crate::commands::CmdResult;
use crate::state::SyncState;

pub fn run(state: &mut SyncState, term: impl Into<String>) -> CmdResult {
    state.set_search_term(term.into());
    CmdResult::default().with_listed(state.view().to_vec())
}
