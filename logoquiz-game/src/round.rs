//! One quiz round: reveal progression, scoring decay, guess evaluation.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::QuizItem;
use crate::constants::{
    CELLS_PER_STAGE, FREE_REVEAL_STAGES, FULL_REVEAL_STAGE, MAX_HINT_STAGE, REVEAL_GRID_CELLS,
    ROUND_START_SCORE,
};

/// How a terminated round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player guessed correctly and was awarded the remaining score.
    Solved,
    /// The answer was revealed after the score ran out; no credit.
    Revealed,
}

/// Result of an `advance_hint` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// Round already over; nothing happened.
    Ignored,
    /// Stage advanced normally.
    Hinted { stage: u8, remaining_score: u8 },
    /// The score was exhausted; the full logo is now shown and the round is
    /// over without credit.
    AnswerRevealed,
}

/// Result of a guess evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Round already over; nothing happened.
    Ignored,
    /// Correct answer; `points` is the score at the moment of the guess.
    Solved { points: u32 },
    /// No match. The round stays active and nothing was mutated.
    Wrong,
}

/// Transient state for exactly one round of one quiz item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    reveal_stage: u8,
    remaining_score: u8,
    outcome: Option<RoundOutcome>,
    reveal_order: Vec<u8>,
}

impl RoundState {
    /// Start a round at stage 0 with a fresh reveal permutation.
    #[must_use]
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut reveal_order: Vec<u8> = (0..REVEAL_GRID_CELLS as u8).collect();
        reveal_order.shuffle(rng);
        Self {
            reveal_stage: 0,
            remaining_score: ROUND_START_SCORE,
            outcome: None,
            reveal_order,
        }
    }

    #[must_use]
    pub const fn reveal_stage(&self) -> u8 {
        self.reveal_stage
    }

    #[must_use]
    pub const fn remaining_score(&self) -> u8 {
        self.remaining_score
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of mask cells currently uncovered.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        if self.reveal_stage >= FULL_REVEAL_STAGE {
            REVEAL_GRID_CELLS
        } else {
            usize::from(self.reveal_stage) * CELLS_PER_STAGE
        }
    }

    /// The uncovered cell indices, in reveal order.
    #[must_use]
    pub fn revealed_cells(&self) -> &[u8] {
        &self.reveal_order[..self.revealed_count()]
    }

    /// Advance the reveal by one stage.
    ///
    /// The first two stages cost nothing; every later stage costs one point.
    /// Once the score is exhausted (or the last hint stage was reached), the
    /// next call uncovers the whole logo and terminates the round without
    /// credit.
    pub fn advance_hint(&mut self) -> HintOutcome {
        if self.is_over() {
            return HintOutcome::Ignored;
        }

        if self.remaining_score == 0 || self.reveal_stage >= MAX_HINT_STAGE {
            self.remaining_score = 0;
            self.reveal_stage = FULL_REVEAL_STAGE;
            self.outcome = Some(RoundOutcome::Revealed);
            return HintOutcome::AnswerRevealed;
        }

        self.reveal_stage += 1;
        if self.reveal_stage > FREE_REVEAL_STAGES {
            self.remaining_score = self.remaining_score.saturating_sub(1);
        }
        HintOutcome::Hinted {
            stage: self.reveal_stage,
            remaining_score: self.remaining_score,
        }
    }

    /// Evaluate a guess against the round's item.
    ///
    /// A match terminates the round as solved, forces the full reveal for
    /// display, and reports the awarded points. A miss leaves every field
    /// untouched.
    pub fn guess(&mut self, item: &QuizItem, text: &str) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Ignored;
        }
        if !item.matches(text) {
            return GuessOutcome::Wrong;
        }
        let points = u32::from(self.remaining_score);
        self.reveal_stage = FULL_REVEAL_STAGE;
        self.outcome = Some(RoundOutcome::Solved);
        GuessOutcome::Solved { points }
    }
}
