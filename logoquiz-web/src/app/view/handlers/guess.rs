use crate::app::state::AppState;
use crate::storage::LocalStore;
use logoquiz_game::{GuessOutcome, LeaderboardStore, SessionError, SessionState};
use yew::prelude::*;

const NO_PLAYER_MSG: &str = "No active player is set for this session.";

pub fn build_submit_guess(state: &AppState) -> Callback<String> {
    let session_handle = state.session.clone();
    let leaderboard_handle = state.leaderboard.clone();
    let wrong_flash = state.wrong_flash.clone();
    let guess_error = state.guess_error.clone();
    Callback::from(move |text: String| {
        let Some(mut sess) = (*session_handle).clone() else {
            return;
        };
        match sess.submit_guess(&text) {
            Ok(GuessOutcome::Solved { points }) => {
                let Some(player_id) = sess.player.as_ref().map(|p| p.id.clone()) else {
                    return;
                };
                match sess.record_win(&player_id, points) {
                    Ok(snapshot) => {
                        let mut board = (*leaderboard_handle).clone();
                        board.merge(&snapshot);
                        if let Err(err) = LocalStore.save(&board) {
                            log::warn!("leaderboard not persisted: {err}");
                        }
                        leaderboard_handle.set(board);
                    }
                    Err(err) => log::error!("round win rejected: {err}"),
                }
                crate::a11y::set_status("Correct answer!");
                guess_error.set(None);
                wrong_flash.set(false);
                session_handle.set(Some(sess));
            }
            Ok(GuessOutcome::Wrong) => {
                crate::a11y::set_status("Wrong answer, try again.");
                guess_error.set(None);
                wrong_flash.set(true);
            }
            Ok(GuessOutcome::Ignored) => {}
            Err(SessionError::NoActivePlayer | SessionError::PlayerMismatch) => {
                guess_error.set(Some(AttrValue::from(NO_PLAYER_MSG)));
            }
        }
    })
}

/// Whether the deferred wrong-flash timer may apply its effect: only while
/// the round it flashed for is still running. Once the round has terminated
/// the timer must be a no-op.
pub(crate) fn should_clear_flash(session: Option<&SessionState>) -> bool {
    session
        .and_then(SessionState::round)
        .is_some_and(|round| !round.is_over())
}

pub fn build_clear_flash(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let wrong_flash = state.wrong_flash.clone();
    Callback::from(move |()| {
        if should_clear_flash((*session_handle).as_ref()) {
            wrong_flash.set(false);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use logoquiz_game::Catalog;

    #[test]
    fn flash_clears_only_while_the_round_is_live() {
        assert!(!should_clear_flash(None));

        let mut session = SessionState::start(&Catalog::builtin(), "Tester", 1);
        assert!(should_clear_flash(Some(&session)));

        // Timer firing after the round terminated must be a no-op.
        let answer = session.current_item().unwrap().display_name().to_string();
        let _ = session.submit_guess(&answer).unwrap();
        assert!(!should_clear_flash(Some(&session)));
    }
}
