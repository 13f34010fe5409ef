//! Flashcard drill for StudyLoom
//!
//! This module provides:
//! - A deterministic three-card deck generated from a subject and topic
//! - A drill session stepping through the deck with flip/next/prev
//! - Persistence of the session under `flashcards_v2`

pub mod deck;
pub mod drill;
pub mod models;

pub use deck::generate_deck;
pub use drill::FlashcardDrill;
pub use models::*;
