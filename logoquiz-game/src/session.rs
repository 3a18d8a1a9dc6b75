//! The session controller: lobby → playing → ended lifecycle for one
//! playthrough, wiring rounds to the player score.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, QuizItem};
use crate::constants::ROUNDS_PER_SESSION;
use crate::player::{Player, PlayerId};
use crate::rng::reveal_rng;
use crate::round::{GuessOutcome, HintOutcome, RoundState};

/// Screen-level lifecycle. Transitions only move forward:
/// `Lobby → Playing → Ended`, then `restart` back to `Lobby`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Lobby,
    Playing,
    Ended,
}

/// Precondition failures surfaced to the caller. Everything else (actions
/// outside `Playing`, actions on a finished round) is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no active player for this session")]
    NoActivePlayer,
    #[error("player id does not match the active player")]
    PlayerMismatch,
}

/// Result of advancing past the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAdvance {
    /// Round action outside `Playing`; nothing happened.
    Ignored,
    /// Moved on to the round with this index; a fresh reveal was drawn.
    Advanced(usize),
    /// That was the last round; the session is over.
    Ended,
}

/// All state for one playthrough. Owned by the presentation layer and
/// mutated strictly in response to discrete user events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub seed: u64,
    pub player: Option<Player>,
    pub items: Vec<QuizItem>,
    pub round_index: usize,
    pub round: Option<RoundState>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Lobby,
            seed: 0,
            player: None,
            items: Vec::new(),
            round_index: 0,
            round: None,
        }
    }
}

impl SessionState {
    /// Start a session: fresh player, shuffled item order, first round.
    ///
    /// The lobby view guarantees `name` is non-empty after trimming; the
    /// controller itself does not validate it.
    #[must_use]
    pub fn start(catalog: &Catalog, name: &str, seed: u64) -> Self {
        let items = catalog.draw(seed);
        let round = RoundState::new(&mut reveal_rng(seed, 0));
        Self {
            phase: SessionPhase::Playing,
            seed,
            player: Some(Player::new(name.trim(), seed)),
            items,
            round_index: 0,
            round: Some(round),
        }
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.phase, SessionPhase::Playing)
    }

    /// Item under the mask for the current round.
    #[must_use]
    pub fn current_item(&self) -> Option<&QuizItem> {
        if self.is_playing() {
            self.items.get(self.round_index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.items.len().min(ROUNDS_PER_SESSION)
    }

    /// Uncover the next reveal stage of the active round.
    pub fn advance_hint(&mut self) -> HintOutcome {
        if !self.is_playing() {
            return HintOutcome::Ignored;
        }
        self.round
            .as_mut()
            .map_or(HintOutcome::Ignored, RoundState::advance_hint)
    }

    /// Evaluate a guess against the current round's item.
    ///
    /// Requires an active player identity; without one the call fails
    /// without mutating any state, and the presentation layer surfaces the
    /// message until a player becomes active.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, SessionError> {
        if !self.is_playing() {
            return Ok(GuessOutcome::Ignored);
        }
        if self.player.is_none() {
            return Err(SessionError::NoActivePlayer);
        }
        let Some(item) = self.items.get(self.round_index).cloned() else {
            return Ok(GuessOutcome::Ignored);
        };
        Ok(self
            .round
            .as_mut()
            .map_or(GuessOutcome::Ignored, |round| round.guess(&item, text)))
    }

    /// Credit a won round to the active player and hand back a copy for the
    /// immediate leaderboard merge.
    pub fn record_win(&mut self, player_id: &PlayerId, points: u32) -> Result<Player, SessionError> {
        let Some(player) = self.player.as_mut() else {
            return Err(SessionError::NoActivePlayer);
        };
        if player.id != *player_id {
            return Err(SessionError::PlayerMismatch);
        }
        player.award(points);
        Ok(player.clone())
    }

    /// Move to the next round, or end the session after the last one.
    pub fn advance_round(&mut self) -> RoundAdvance {
        if !self.is_playing() {
            return RoundAdvance::Ignored;
        }
        if self.round_index + 1 < self.total_rounds() {
            self.round_index += 1;
            self.round = Some(RoundState::new(&mut reveal_rng(self.seed, self.round_index)));
            RoundAdvance::Advanced(self.round_index)
        } else {
            self.phase = SessionPhase::Ended;
            self.round = None;
            RoundAdvance::Ended
        }
    }

    /// Back to the lobby. The player and item order are discarded; the
    /// leaderboard lives elsewhere and persists independently.
    pub fn restart(&mut self) {
        *self = Self::default();
    }
}
