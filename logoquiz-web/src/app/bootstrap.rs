use crate::app::state::AppState;
use crate::storage::LocalStore;
use logoquiz_game::LeaderboardStore;
use yew::prelude::*;

/// Load the persisted leaderboard exactly once at mount.
///
/// Absent or corrupt data falls back to an empty board; storage being
/// unavailable is only worth a log line.
#[hook]
pub fn use_bootstrap(state: &AppState) {
    let leaderboard = state.leaderboard.clone();
    use_effect_with((), move |_| {
        match LocalStore.load() {
            Ok(Some(board)) => leaderboard.set(board),
            Ok(None) => {}
            Err(err) => log::warn!("leaderboard not loaded: {err}"),
        }
    });
}
