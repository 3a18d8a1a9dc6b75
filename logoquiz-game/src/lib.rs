//! Logoquiz Game Engine
//!
//! Platform-agnostic core logic for the Logoquiz guessing game: a logo is
//! uncovered in discrete steps while the player types guesses, correct
//! answers award the round's decaying score, and bests feed a persisted
//! leaderboard. This crate provides all game mechanics without UI or
//! platform-specific dependencies.

pub mod catalog;
pub mod constants;
pub mod leaderboard;
pub mod player;
pub mod rng;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use catalog::{Catalog, QuizItem, normalize_answer};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use player::{Player, PlayerId};
pub use round::{GuessOutcome, HintOutcome, RoundOutcome, RoundState};
pub use session::{RoundAdvance, SessionError, SessionPhase, SessionState};

/// Trait for abstracting leaderboard persistence.
/// Platform-specific implementations should provide this.
pub trait LeaderboardStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the persisted leaderboard, if any.
    ///
    /// Implementations should treat unparsable stored data as absent so a
    /// corrupt slot can never take the game down.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be accessed.
    fn load(&self) -> Result<Option<Leaderboard>, Self::Error>;

    /// Persist the whole board, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be written.
    fn save(&self, board: &Leaderboard) -> Result<(), Self::Error>;
}
