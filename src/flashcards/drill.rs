//! Drill session over a generated deck

use super::deck::generate_deck;
use super::models::{Card, FlashcardSession};
use crate::store::{Persisted, SharedStore};

pub const STORAGE_KEY: &str = "flashcards_v2";

pub struct FlashcardDrill {
    session: FlashcardSession,
    record: Persisted<FlashcardSession>,
}

impl FlashcardDrill {
    pub fn mount(store: SharedStore) -> Self {
        let record = Persisted::new(store, STORAGE_KEY);
        let session = record
            .load()
            .map(FlashcardSession::sanitized)
            .unwrap_or_default();
        Self { session, record }
    }

    pub fn session(&self) -> &FlashcardSession {
        &self.session
    }

    pub fn current(&self) -> Option<&Card> {
        self.session.current()
    }

    /// 1-based position and deck length, `None` before a deck exists
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.session.is_active() {
            Some((self.session.index + 1, self.session.cards.len()))
        } else {
            None
        }
    }

    pub fn can_prev(&self) -> bool {
        self.session.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.session.index + 1 < self.session.cards.len()
    }

    /// Generate the deck for `subject`/`topic`. Blank inputs are rejected and
    /// leave the session untouched.
    pub fn start(&mut self, subject: &str, topic: &str) -> bool {
        let subject = subject.trim();
        let topic = topic.trim();
        if subject.is_empty() || topic.is_empty() {
            return false;
        }

        self.session.subject = subject.to_string();
        self.session.topic = topic.to_string();
        self.session.cards = generate_deck(subject, topic);
        self.session.index = 0;
        self.session.flipped = false;
        log::info!("Started flashcard drill: {} / {}", subject, topic);
        self.commit();
        true
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.session.index += 1;
        }
        self.session.flipped = false;
        self.commit();
    }

    pub fn prev(&mut self) {
        self.session.index = self.session.index.saturating_sub(1);
        self.session.flipped = false;
        self.commit();
    }

    /// Flipping is view-only and does not touch storage
    pub fn flip(&mut self) {
        self.session.flipped = !self.session.flipped;
    }

    /// Drop the deck and return to the input form; subject/topic are kept
    pub fn reset(&mut self) {
        self.session.cards.clear();
        self.session.index = 0;
        self.session.flipped = false;
        self.commit();
    }

    fn commit(&self) {
        self.record.save(&self.session);
    }
}
