//! The fixed quiz catalog and answer matching.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::constants::ROUNDS_PER_SESSION;
use crate::rng::draw_rng;

/// One guessable item: a stable id, its acceptable answers, and an opaque
/// art key the presentation layer resolves to the actual logo rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: String,
    pub answers: Vec<String>,
    pub art: String,
}

impl QuizItem {
    fn new(id: &str, answers: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            answers: answers.iter().map(ToString::to_string).collect(),
            art: id.to_string(),
        }
    }

    /// Primary answer shown when the round resolves.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.answers.first().map_or(self.id.as_str(), String::as_str)
    }

    /// Case- and whitespace-insensitive answer check.
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        let normalized = normalize_answer(guess);
        if normalized.is_empty() {
            return false;
        }
        self.answers
            .iter()
            .any(|answer| normalize_answer(answer) == normalized)
    }
}

/// Lower-case and strip every whitespace character, so "Tik Tok" and
/// "tiktok" compare equal.
#[must_use]
pub fn normalize_answer(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Immutable list of quiz items for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<QuizItem>,
}

impl Catalog {
    /// The built-in app-logo catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            items: vec![
                QuizItem::new("insta", &["instagram", "insta", "ig"]),
                QuizItem::new("youtube", &["youtube", "yt"]),
                QuizItem::new("kakao", &["kakaotalk", "kakao", "katalk"]),
                QuizItem::new("tiktok", &["tiktok"]),
                QuizItem::new("x", &["x", "twitter"]),
                QuizItem::new("netflix", &["netflix"]),
                QuizItem::new("spotify", &["spotify"]),
                QuizItem::new("naver", &["naver"]),
                QuizItem::new("roblox", &["roblox"]),
                QuizItem::new("discord", &["discord"]),
            ],
        }
    }

    /// Build a catalog from explicit items. Used by tests and any future
    /// alternative item packs.
    #[must_use]
    pub fn from_items(items: Vec<QuizItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw the session's round order: uniform shuffle of the full catalog,
    /// first [`ROUNDS_PER_SESSION`] items kept.
    #[must_use]
    pub fn draw(&self, seed: u64) -> Vec<QuizItem> {
        let mut rng = draw_rng(seed);
        let mut drawn = self.items.clone();
        drawn.shuffle(&mut rng);
        drawn.truncate(ROUNDS_PER_SESSION);
        drawn
    }
}
