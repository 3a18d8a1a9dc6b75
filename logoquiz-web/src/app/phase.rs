use logoquiz_game::{Leaderboard, LeaderboardEntry, Player, SessionPhase, SessionState};

/// Screen currently shown. Mirrors the session lifecycle one-to-one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lobby,
    Playing,
    Ended,
}

#[must_use]
pub const fn phase_for_session(session: Option<&SessionState>) -> Phase {
    match session {
        Some(session) => match session.phase {
            SessionPhase::Lobby => Phase::Lobby,
            SessionPhase::Playing => Phase::Playing,
            SessionPhase::Ended => Phase::Ended,
        },
        None => Phase::Lobby,
    }
}

/// Rows shown in the ranking panels: the persisted top list plus the
/// current player appended when they have not reached it yet.
#[must_use]
pub fn display_players(board: &Leaderboard, current: Option<&Player>) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<LeaderboardEntry> = board.entries().to_vec();
    if let Some(player) = current
        && !rows.iter().any(|row| row.id == player.id.as_str())
    {
        rows.push(LeaderboardEntry::from(player));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use logoquiz_game::Catalog;

    #[test]
    fn phase_tracks_the_session_lifecycle() {
        assert_eq!(phase_for_session(None), Phase::Lobby);

        let mut session = SessionState::start(&Catalog::builtin(), "Tester", 1);
        assert_eq!(phase_for_session(Some(&session)), Phase::Playing);

        while session.phase == SessionPhase::Playing {
            session.advance_round();
        }
        assert_eq!(phase_for_session(Some(&session)), Phase::Ended);

        session.restart();
        assert_eq!(phase_for_session(Some(&session)), Phase::Lobby);
    }

    #[test]
    fn display_players_appends_unranked_current_player() {
        let session = SessionState::start(&Catalog::builtin(), "Newcomer", 2);
        let player = session.player.as_ref().unwrap();

        let mut board = Leaderboard::default();
        let rows = display_players(&board, Some(player));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Newcomer");
        assert_eq!(rows[0].score, 0);

        // Once merged, the player is not duplicated.
        board.merge(player);
        let rows = display_players(&board, Some(player));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn display_players_without_session_is_the_board() {
        let board = Leaderboard::default();
        assert!(display_players(&board, None).is_empty());
    }
}
