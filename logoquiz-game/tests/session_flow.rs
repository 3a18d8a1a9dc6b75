use logoquiz_game::{
    Catalog, GuessOutcome, HintOutcome, Leaderboard, QuizItem, RoundAdvance, RoundOutcome,
    SessionPhase, SessionState,
    constants::{LEADERBOARD_CAP, ROUNDS_PER_SESSION},
};

/// A catalog whose answers are predictable from the item id, so tests can
/// solve any round without inspecting the reveal.
fn scripted_catalog() -> Catalog {
    let items = (0..10)
        .map(|i| QuizItem {
            id: format!("item-{i}"),
            answers: vec![format!("answer {i}"), format!("alias{i}")],
            art: format!("item-{i}"),
        })
        .collect();
    Catalog::from_items(items)
}

fn solve_current_round(session: &mut SessionState) -> u32 {
    let answer = session
        .current_item()
        .expect("active round has an item")
        .display_name()
        .to_string();
    match session.submit_guess(&answer).expect("player is active") {
        GuessOutcome::Solved { points } => points,
        other => panic!("expected a solve, got {other:?}"),
    }
}

#[test]
fn wrong_guess_then_free_hints_then_costed_solve() {
    let catalog = scripted_catalog();
    let mut session = SessionState::start(&catalog, "Tester", 0xBEEF);
    let mut board = Leaderboard::default();

    // A miss leaves the round untouched.
    let miss = session.submit_guess("WRONG").unwrap();
    assert_eq!(miss, GuessOutcome::Wrong);
    let round = session.round().unwrap();
    assert_eq!(round.remaining_score(), 5);
    assert!(!round.is_over());

    // Two free stages, then the third hint costs a point.
    session.advance_hint();
    session.advance_hint();
    assert_eq!(session.round().unwrap().remaining_score(), 5);
    session.advance_hint();
    assert_eq!(session.round().unwrap().remaining_score(), 4);

    // Solving awards exactly the score at guess time.
    let points = solve_current_round(&mut session);
    assert_eq!(points, 4);
    let player_id = session.player.as_ref().unwrap().id.clone();
    let snapshot = session.record_win(&player_id, points).unwrap();
    assert_eq!(snapshot.score, 4);

    board.merge(&snapshot);
    assert_eq!(board.entries().len(), 1);
    assert_eq!(board.entries()[0].name, "Tester");
    assert_eq!(board.entries()[0].score, 4);
}

#[test]
fn running_out_of_hints_awards_nothing() {
    let catalog = scripted_catalog();
    let mut session = SessionState::start(&catalog, "Tester", 0xCAFE);
    let board = Leaderboard::default();

    for _ in 0..5 {
        assert!(matches!(
            session.advance_hint(),
            HintOutcome::Hinted { .. }
        ));
    }
    assert_eq!(session.advance_hint(), HintOutcome::AnswerRevealed);

    let round = session.round().unwrap();
    assert_eq!(round.outcome(), Some(RoundOutcome::Revealed));
    assert_eq!(round.remaining_score(), 0);

    // No win was recorded, so the board is untouched.
    assert!(board.is_empty());
    assert_eq!(session.player.as_ref().unwrap().score, 0);
}

/// Take hints until the round is worth exactly `target` points.
fn burn_to(session: &mut SessionState, target: u8) {
    while session.round().unwrap().remaining_score() > target {
        assert!(matches!(
            session.advance_hint(),
            HintOutcome::Hinted { .. }
        ));
    }
}

fn win_round_worth(session: &mut SessionState, board: &mut Leaderboard, target: u8) {
    burn_to(session, target);
    let points = solve_current_round(session);
    assert_eq!(points, u32::from(target));
    let id = session.player.as_ref().unwrap().id.clone();
    let snapshot = session.record_win(&id, points).unwrap();
    board.merge(&snapshot);
    session.advance_round();
}

#[test]
fn same_nickname_across_sessions_shares_one_slot() {
    let catalog = scripted_catalog();
    let mut board = Leaderboard::default();

    // First run under the nickname scores 3.
    let mut session = SessionState::start(&catalog, "Tester", 11);
    win_round_worth(&mut session, &mut board, 3);
    while session.phase == SessionPhase::Playing {
        session.advance_round();
    }
    assert_eq!(board.entries()[0].score, 3);

    // Second run scores 7 (a full-score solve plus a late solve).
    let mut session = SessionState::start(&catalog, "Tester", 22);
    win_round_worth(&mut session, &mut board, 5);
    win_round_worth(&mut session, &mut board, 2);
    while session.phase == SessionPhase::Playing {
        session.advance_round();
    }
    assert_eq!(session.phase, SessionPhase::Ended);

    // 3 points, then 7 points, same name: one entry with the higher score.
    assert_eq!(board.entries().len(), 1);
    assert_eq!(board.entries()[0].name, "Tester");
    assert_eq!(board.entries()[0].score, 7);
}

#[test]
fn full_session_walks_seven_rounds() {
    let catalog = scripted_catalog();
    let mut session = SessionState::start(&catalog, "Walker", 0x1234);
    let mut seen_items = Vec::new();

    for index in 0..ROUNDS_PER_SESSION {
        assert_eq!(session.round_index, index);
        seen_items.push(session.current_item().unwrap().id.clone());
        let advance = session.advance_round();
        if index + 1 < ROUNDS_PER_SESSION {
            assert_eq!(advance, RoundAdvance::Advanced(index + 1));
        } else {
            assert_eq!(advance, RoundAdvance::Ended);
        }
    }

    // The drawn items are distinct.
    let mut deduped = seen_items.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), seen_items.len());

    session.restart();
    assert_eq!(session.phase, SessionPhase::Lobby);
    assert!(session.player.is_none());
    assert!(session.items.is_empty());
}

#[test]
fn leaderboard_stays_bounded_across_many_sessions() {
    let catalog = scripted_catalog();
    let mut board = Leaderboard::default();

    for seed in 0..25_u64 {
        let mut session = SessionState::start(&catalog, &format!("p{seed}"), seed);
        let points = solve_current_round(&mut session);
        let id = session.player.as_ref().unwrap().id.clone();
        let snapshot = session.record_win(&id, points).unwrap();
        board.merge(&snapshot);
        assert!(board.entries().len() <= LEADERBOARD_CAP);
    }

    // Sorted descending throughout.
    let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
}
