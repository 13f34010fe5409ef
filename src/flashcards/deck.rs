//! Sample deck generator
//!
//! The deck is a pure function of its inputs: the same subject and topic
//! always produce the same three cards, in the same order.

use super::models::Card;

/// Build the drill deck for a subject/topic pair. Callers trim inputs first.
pub fn generate_deck(subject: &str, topic: &str) -> Vec<Card> {
    vec![
        Card::new(
            format!("What is the main concept of {}?", topic),
            format!("{} overview in {}", topic, subject),
        ),
        Card::new(
            format!("List 3 key points about {}.", topic),
            "Point A, Point B, Point C",
        ),
        Card::new(
            format!("Explain one example related to {}.", topic),
            format!("An example that illustrates {}", topic),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_is_deterministic() {
        assert_eq!(generate_deck("Biology", "Cells"), generate_deck("Biology", "Cells"));
    }

    #[test]
    fn test_deck_content() {
        let deck = generate_deck("Biology", "Cells");
        assert_eq!(deck.len(), 3);
        assert_eq!(deck[0].q, "What is the main concept of Cells?");
        assert_eq!(deck[0].a, "Cells overview in Biology");
        assert_eq!(deck[2].a, "An example that illustrates Cells");
    }
}
