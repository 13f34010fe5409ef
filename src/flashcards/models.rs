//! Data models for the flashcard drill

use serde::{Deserialize, Serialize};

/// A question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub q: String,
    pub a: String,
}

impl Card {
    pub fn new(q: impl Into<String>, a: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            a: a.into(),
        }
    }
}

/// Drill state. `flipped` is view state and is never written to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashcardSession {
    /// Subject form field
    pub subject: String,
    /// Topic form field
    pub topic: String,
    pub cards: Vec<Card>,
    pub index: usize,
    #[serde(skip)]
    pub flipped: bool,
}

impl FlashcardSession {
    /// True once a deck has been generated
    pub fn is_active(&self) -> bool {
        !self.cards.is_empty()
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.index)
    }

    /// Bring a decoded session back within its invariants
    pub fn sanitized(mut self) -> Self {
        self.index = match self.cards.len() {
            0 => 0,
            len => self.index.min(len - 1),
        };
        self.flipped = false;
        self
    }
}
