use crate::CardId;
use serde::{Deserialize, Serialize};

/// The stock of undealt cards, browsed one exposed card at a time.
///
/// Advancing wraps around whatever still REMAINS in the pile, but cards
/// played away are spliced out for good: there is no waste re-cycle. Once
/// the last card has been played the pile is terminally exhausted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawPile {
    cards: Vec<CardId>,
    cursor: usize,
}

impl DrawPile {
    pub fn new(cards: Vec<CardId>) -> Self {
        Self { cards, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn exposed(&self) -> Option<CardId> {
        self.cards.get(self.cursor).copied()
    }

    /// Browse to the next remaining card, wrapping at the end. Returns the
    /// newly exposed card, or None when exhausted.
    pub fn advance(&mut self) -> Option<CardId> {
        if self.cards.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.cards.len();
        self.exposed()
    }

    /// Splice the exposed card out of the pile. The card that slides into
    /// the cursor position (wrapping at the end) becomes exposed.
    pub fn remove_exposed(&mut self) -> Option<CardId> {
        if self.cards.is_empty() {
            return None;
        }
        let id = self.cards.remove(self.cursor);
        if !self.cards.is_empty() && self.cursor >= self.cards.len() {
            self.cursor = 0;
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pile_of(n: usize) -> DrawPile {
        DrawPile::new((0..n).map(CardId).collect())
    }

    #[test]
    fn advance_wraps_over_remaining_cards() {
        let mut pile = pile_of(3);
        assert_eq!(pile.exposed(), Some(CardId(0)));
        assert_eq!(pile.advance(), Some(CardId(1)));
        assert_eq!(pile.advance(), Some(CardId(2)));
        assert_eq!(pile.advance(), Some(CardId(0)));
    }

    #[test]
    fn removed_cards_never_come_back() {
        let mut pile = pile_of(3);
        pile.advance();
        assert_eq!(pile.remove_exposed(), Some(CardId(1)));
        assert_eq!(pile.exposed(), Some(CardId(2)));
        assert_eq!(pile.advance(), Some(CardId(0)));
        assert_eq!(pile.advance(), Some(CardId(2)));
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn removing_the_tail_wraps_exposure_to_the_front() {
        let mut pile = pile_of(2);
        pile.advance();
        assert_eq!(pile.remove_exposed(), Some(CardId(1)));
        assert_eq!(pile.exposed(), Some(CardId(0)));
    }

    #[test]
    fn exhaustion_is_terminal() {
        let mut pile = pile_of(1);
        assert_eq!(pile.remove_exposed(), Some(CardId(0)));
        assert!(pile.is_exhausted());
        assert_eq!(pile.exposed(), None);
        assert_eq!(pile.advance(), None);
        assert_eq!(pile.remove_exposed(), None);
    }
}
