//! Ranked, size-bounded record of best scores across sessions.

use serde::{Deserialize, Serialize};

use crate::constants::LEADERBOARD_CAP;
use crate::player::Player;

/// The canonical persisted shape: id, name, score. Serialized as a plain
/// JSON array of these records under a single storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub score: u32,
}

impl From<&Player> for LeaderboardEntry {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.as_str().to_string(),
            name: player.name.clone(),
            score: player.score,
        }
    }
}

/// At most [`LEADERBOARD_CAP`] entries, sorted by score descending. Ties
/// keep their original relative order (stable sort).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Normalize arbitrary stored entries into a valid board.
    #[must_use]
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        let mut board = Self { entries };
        board.normalize();
        board
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold a player's latest score into the board.
    ///
    /// Slots are keyed by display name: an existing entry with the same
    /// name is replaced only when the new score is strictly greater, so two
    /// runs under one nickname share a single slot. Returns the updated
    /// ranking for display.
    pub fn merge(&mut self, player: &Player) -> &[LeaderboardEntry] {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.name == player.name)
        {
            Some(existing) => {
                if player.score > existing.score {
                    *existing = LeaderboardEntry::from(player);
                }
            }
            None => self.entries.push(LeaderboardEntry::from(player)),
        }
        self.normalize();
        &self.entries
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_CAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, seed: u64, score: u32) -> Player {
        let mut p = Player::new(name, seed);
        p.award(score);
        p
    }

    #[test]
    fn merge_appends_new_names_sorted() {
        let mut board = Leaderboard::default();
        board.merge(&player("Ada", 1, 3));
        board.merge(&player("Grace", 2, 7));
        board.merge(&player("Edsger", 3, 5));

        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Grace", "Edsger", "Ada"]);
    }

    #[test]
    fn same_name_keeps_the_higher_score() {
        let mut board = Leaderboard::default();
        board.merge(&player("Tester", 1, 7));
        board.merge(&player("Tester", 2, 3));
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].score, 7);

        board.merge(&player("Tester", 3, 9));
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].score, 9);
    }

    #[test]
    fn board_never_exceeds_the_cap() {
        let mut board = Leaderboard::default();
        for i in 0..20_u32 {
            board.merge(&player(&format!("p{i}"), u64::from(i), i));
        }
        assert_eq!(board.entries().len(), LEADERBOARD_CAP);
        // The weakest half fell off.
        assert!(board.entries().iter().all(|e| e.score >= 10));
    }

    #[test]
    fn ties_preserve_insertion_order() {
        let mut board = Leaderboard::default();
        board.merge(&player("first", 1, 4));
        board.merge(&player("second", 2, 4));
        board.merge(&player("third", 3, 4));

        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn from_entries_normalizes_stored_data() {
        let raw = (0..12_u32)
            .map(|i| LeaderboardEntry {
                id: format!("{i:016x}"),
                name: format!("p{i}"),
                score: i,
            })
            .collect();
        let board = Leaderboard::from_entries(raw);
        assert_eq!(board.entries().len(), LEADERBOARD_CAP);
        assert_eq!(board.entries()[0].score, 11);
    }

    #[test]
    fn serializes_as_a_plain_array() {
        let mut board = Leaderboard::default();
        board.merge(&player("Tester", 1, 4));
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.starts_with('['), "expected an array, got {json}");

        let parsed: Leaderboard = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }
}
