//! Browser `localStorage` adapter for the persisted leaderboard.
//!
//! One fixed slot holds the serialized entry array. It is read once at
//! startup and rewritten wholesale on every merge.

use logoquiz_game::{Leaderboard, LeaderboardStore};
use thiserror::Error;

use crate::dom::{js_error_message, local_storage};

/// The single storage key for the hall of fame.
pub const LEADERBOARD_KEY: &str = "logoquiz.hof";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("browser localStorage is unavailable")]
    Unavailable,
    #[error("failed to write leaderboard: {0}")]
    Write(String),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Zero-sized handle to the browser store.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LeaderboardStore for LocalStore {
    type Error = StoreError;

    fn load(&self) -> Result<Option<Leaderboard>, StoreError> {
        let Some(storage) = local_storage() else {
            return Err(StoreError::Unavailable);
        };
        let Some(text) = storage.get_item(LEADERBOARD_KEY).ok().flatten() else {
            return Ok(None);
        };
        match serde_json::from_str(&text) {
            Ok(board) => Ok(Some(board)),
            Err(err) => {
                // A corrupt slot must never take the game down; start fresh.
                log::warn!("discarding unparsable leaderboard data: {err}");
                Ok(None)
            }
        }
    }

    fn save(&self, board: &Leaderboard) -> Result<(), StoreError> {
        let Some(storage) = local_storage() else {
            return Err(StoreError::Unavailable);
        };
        let text = serde_json::to_string(board)?;
        storage
            .set_item(LEADERBOARD_KEY, &text)
            .map_err(|err| StoreError::Write(js_error_message(&err)))
    }
}
