use logoquiz_game::constants::REVEAL_GRID_CELLS;
use logoquiz_game::{RoundOutcome, RoundState};

/// Overlay shown on top of the logo frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Feedback {
    Correct,
    Wrong,
    Timeout,
}

/// Terminal outcomes always win over the transient wrong flash.
pub(super) fn feedback_for(round: &RoundState, wrong_flash: bool) -> Option<Feedback> {
    match round.outcome() {
        Some(RoundOutcome::Solved) => Some(Feedback::Correct),
        Some(RoundOutcome::Revealed) => Some(Feedback::Timeout),
        None if wrong_flash => Some(Feedback::Wrong),
        None => None,
    }
}

/// Per-cell visibility for the 10x10 mask.
pub(super) fn revealed_mask(round: &RoundState) -> [bool; REVEAL_GRID_CELLS] {
    let mut mask = [false; REVEAL_GRID_CELLS];
    for &cell in round.revealed_cells() {
        mask[usize::from(cell)] = true;
    }
    mask
}

pub(super) fn hint_button_label(round: &RoundState) -> String {
    if round.is_over() {
        String::from("Round over")
    } else if round.remaining_score() == 0 {
        String::from("Reveal the answer")
    } else if round.reveal_stage() == 0 {
        String::from("Show a hint")
    } else {
        format!("Next hint ({} pts)", round.remaining_score())
    }
}

pub(super) const fn next_button_label(round_index: usize, total_rounds: usize) -> &'static str {
    if round_index + 1 >= total_rounds {
        "See results"
    } else {
        "Next logo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logoquiz_game::rng::reveal_rng;

    fn round() -> RoundState {
        RoundState::new(&mut reveal_rng(77, 0))
    }

    #[test]
    fn feedback_prefers_terminal_outcomes() {
        let mut r = round();
        assert_eq!(feedback_for(&r, false), None);
        assert_eq!(feedback_for(&r, true), Some(Feedback::Wrong));

        let item = logoquiz_game::Catalog::builtin().items()[0].clone();
        let _ = r.guess(&item, "instagram");
        assert_eq!(feedback_for(&r, true), Some(Feedback::Correct));

        let mut r = round();
        while !r.is_over() {
            r.advance_hint();
        }
        assert_eq!(feedback_for(&r, false), Some(Feedback::Timeout));
    }

    #[test]
    fn mask_mirrors_the_reveal_schedule() {
        let mut r = round();
        assert_eq!(revealed_mask(&r).iter().filter(|&&c| c).count(), 0);
        r.advance_hint();
        assert_eq!(revealed_mask(&r).iter().filter(|&&c| c).count(), 4);
        while !r.is_over() {
            r.advance_hint();
        }
        assert_eq!(
            revealed_mask(&r).iter().filter(|&&c| c).count(),
            REVEAL_GRID_CELLS
        );
    }

    #[test]
    fn button_labels_follow_round_state() {
        let mut r = round();
        assert_eq!(hint_button_label(&r), "Show a hint");
        r.advance_hint();
        assert_eq!(hint_button_label(&r), "Next hint (5 pts)");
        while !r.is_over() {
            r.advance_hint();
        }
        assert_eq!(hint_button_label(&r), "Round over");

        assert_eq!(next_button_label(0, 7), "Next logo");
        assert_eq!(next_button_label(6, 7), "See results");
    }
}
