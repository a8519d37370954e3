//! Cards committed to the table during the current round.

use super::cards_types::Card;

/// Append-only record of played cards, oldest first.
///
/// Cleared only when the round advances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardHistory {
    cards: Vec<Card>,
}

impl DiscardHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
