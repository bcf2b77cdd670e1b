use crate::{fits_on_foundation, fits_on_tableau, Card};
use serde::{Deserialize, Serialize};

/// Index into the card arena owned by `GameState`. Piles hold ids, never
/// card data, so relocating a run can never leave a stale back-reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CardId(pub usize);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PileId {
    Tableau(u8),
    Foundation(u8),
    Draw,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PileKind {
    Tableau,
    Foundation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pile {
    kind: PileKind,
    cards: Vec<CardId>,
}

impl Pile {
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    pub fn kind(&self) -> PileKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Rule check only; `top` is the resolved identity of the current top
    /// card (None when empty) and `run` the identities about to arrive.
    /// Foundations take one card at a time.
    pub fn can_accept(&self, top: Option<Card>, run: &[Card]) -> bool {
        let Some(first) = run.first() else {
            return false;
        };
        match self.kind {
            PileKind::Tableau => fits_on_tableau(top, *first),
            PileKind::Foundation => run.len() == 1 && fits_on_foundation(top, *first),
        }
    }

    pub fn push_run(&mut self, run: &[CardId]) {
        self.cards.extend_from_slice(run);
    }

    /// Removes `index..top` and returns it base-first. The caller restamps
    /// both piles afterwards.
    pub fn pop_from(&mut self, index: usize) -> Vec<CardId> {
        self.cards.split_off(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Rank, Suit};

    #[test]
    fn pop_from_keeps_run_order() {
        let mut pile = Pile::new(PileKind::Tableau);
        pile.push_run(&[CardId(3), CardId(8), CardId(1), CardId(5)]);
        let run = pile.pop_from(2);
        assert_eq!(run, vec![CardId(1), CardId(5)]);
        assert_eq!(pile.cards(), &[CardId(3), CardId(8)]);
        assert_eq!(pile.top(), Some(CardId(8)));
    }

    #[test]
    fn pop_from_zero_empties_the_pile() {
        let mut pile = Pile::new(PileKind::Tableau);
        pile.push_run(&[CardId(0), CardId(1)]);
        let run = pile.pop_from(0);
        assert_eq!(run.len(), 2);
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);
    }

    #[test]
    fn foundation_rejects_multi_card_runs() {
        let pile = Pile::new(PileKind::Foundation);
        let run = [
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Clubs, Rank::Two),
        ];
        assert!(!pile.can_accept(None, &run));
        assert!(pile.can_accept(None, &run[..1]));
    }

    #[test]
    fn empty_run_is_never_accepted() {
        let pile = Pile::new(PileKind::Tableau);
        assert!(!pile.can_accept(None, &[]));
    }
}
