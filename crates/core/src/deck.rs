use crate::{Card, Rank, RngState, Suit};

pub const DECK_SIZE: usize = 52;

/// The 52 identities in suit-major order. Placement state lives in the
/// arena, not here.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Uniform permutation by rejection: draw a random index into the fixed
/// deck, skip it if already taken, until all 52 are consumed. The deck is
/// small enough that rejection needs no bias correction.
pub fn shuffled_deck(rng: &mut RngState) -> Vec<Card> {
    let deck = full_deck();
    let mut used = [false; DECK_SIZE];
    let mut out = Vec::with_capacity(DECK_SIZE);
    while out.len() < DECK_SIZE {
        let index = rng.pick(DECK_SIZE);
        if used[index] {
            continue;
        }
        used[index] = true;
        out.push(deck[index]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn full_deck_has_52_unique_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.into_iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = RngState::from_seed(99);
        let shuffled = shuffled_deck(&mut rng);
        assert_eq!(shuffled.len(), DECK_SIZE);
        let unique: HashSet<Card> = shuffled.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut a = RngState::from_seed(5);
        let mut b = RngState::from_seed(5);
        assert_eq!(shuffled_deck(&mut a), shuffled_deck(&mut b));

        let mut c = RngState::from_seed(6);
        assert_ne!(shuffled_deck(&mut a), shuffled_deck(&mut c));
    }
}
