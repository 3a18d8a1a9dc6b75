//! The active player for one session.

use serde::{Deserialize, Serialize};

use crate::rng::player_token;

/// Opaque unique token identifying one session's player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Derive a fresh id from the session seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self(format!("{:016x}", player_token(seed)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Created with score 0 at session start; the score only ever increases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
}

impl Player {
    #[must_use]
    pub fn new(name: &str, seed: u64) -> Self {
        Self {
            id: PlayerId::from_seed(seed),
            name: name.to_string(),
            score: 0,
        }
    }

    /// Add round winnings. Scores are monotonically non-decreasing.
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
