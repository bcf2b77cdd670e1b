use crate::{run_is_ordered, Event, EventBus, GameState, PileId, FOUNDATION_PILES};
use serde::{Deserialize, Serialize};

/// What the front-end's coordinate lookup says the pointer landed on.
/// `depth` is the 0-based index into the column; clicks below the stack
/// clamp to the top card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Hit {
    Column { index: usize, depth: usize },
    Foundation(usize),
    Stock,
    Exposed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivationKind {
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activation {
    pub kind: ActivationKind,
    pub hit: Hit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Held {
    pub source: PileId,
    pub start: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Holding(Held),
}

impl GameState {
    /// Drive the two-state selection machine. Every rule violation along
    /// the way is a silent no-op; the machine always lands back in a
    /// consistent state.
    pub fn handle_activation(&mut self, activation: Activation, events: &mut EventBus) {
        match activation.kind {
            ActivationKind::Single => match self.selection {
                Selection::Idle => self.try_select(activation.hit, events),
                Selection::Holding(held) => {
                    self.try_drop(held, activation.hit, events);
                    self.selection = Selection::Idle;
                }
            },
            ActivationKind::Double => {
                // Forced reselect, then auto-send to the first foundation
                // that takes the card.
                self.selection = Selection::Idle;
                self.try_select(activation.hit, events);
                if let Selection::Holding(held) = self.selection {
                    self.auto_to_foundation(held, events);
                }
                self.selection = Selection::Idle;
            }
        }
    }

    fn try_select(&mut self, hit: Hit, events: &mut EventBus) {
        match hit {
            Hit::Column { index, depth } => {
                let len = self.tableau[index].len();
                if len == 0 {
                    return;
                }
                let depth = depth.min(len - 1);
                let id = self.tableau[index].cards()[depth];
                if depth == len - 1 {
                    if self.cards[id.0].face_up {
                        self.selection = Selection::Holding(Held {
                            source: PileId::Tableau(index as u8),
                            start: depth,
                        });
                    } else {
                        self.flip_up(id);
                        events.push(Event::CardFlipped { column: index });
                    }
                } else if self.cards[id.0].face_up {
                    let run = self.run_cards(index, depth);
                    if run_is_ordered(&run) {
                        self.selection = Selection::Holding(Held {
                            source: PileId::Tableau(index as u8),
                            start: depth,
                        });
                    }
                }
            }
            Hit::Exposed => {
                if self.draw.exposed().is_some() {
                    self.selection = Selection::Holding(Held {
                        source: PileId::Draw,
                        start: 0,
                    });
                }
            }
            Hit::Stock => self.advance_draw(events),
            // Nothing is ever picked back up off a foundation.
            Hit::Foundation(_) => {}
        }
    }

    fn try_drop(&mut self, held: Held, hit: Hit, events: &mut EventBus) {
        let to = match hit {
            Hit::Column { index, .. } => PileId::Tableau(index as u8),
            Hit::Foundation(index) => PileId::Foundation(index as u8),
            Hit::Stock | Hit::Exposed => return,
        };
        let _ = match held.source {
            PileId::Draw => self.move_from_draw(to, events),
            PileId::Tableau(col) => self.move_run(col as usize, held.start, to, events),
            PileId::Foundation(_) => return,
        };
    }

    fn auto_to_foundation(&mut self, held: Held, events: &mut EventBus) {
        for index in 0..FOUNDATION_PILES {
            let to = PileId::Foundation(index as u8);
            let moved = match held.source {
                PileId::Draw => self.move_from_draw(to, events),
                PileId::Tableau(col) => self.move_run(col as usize, held.start, to, events),
                PileId::Foundation(_) => return,
            };
            if moved.is_ok() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, CardSlot, Rank, Suit};

    fn fresh() -> (GameState, EventBus) {
        let mut events = EventBus::default();
        let state = GameState::deal(3, &mut events);
        events.drain().count();
        (state, events)
    }

    fn single(hit: Hit) -> Activation {
        Activation {
            kind: ActivationKind::Single,
            hit,
        }
    }

    fn double(hit: Hit) -> Activation {
        Activation {
            kind: ActivationKind::Double,
            hit,
        }
    }

    fn force_card(state: &mut GameState, col: usize, depth: usize, card: Card, face_up: bool) {
        let id = state.tableau(col).cards()[depth];
        let slot = &mut state.cards[id.0];
        *slot = CardSlot {
            card,
            face_up,
            ..*slot
        };
    }

    #[test]
    fn face_down_top_flips_and_stays_idle() {
        let (mut state, mut events) = fresh();
        let top = state.tableau(1).top().unwrap();
        state.cards[top.0].face_up = false;

        state.handle_activation(single(Hit::Column { index: 1, depth: 1 }), &mut events);
        assert!(state.card(top).face_up);
        assert_eq!(state.selection(), Selection::Idle);
        let fired: Vec<Event> = events.drain().collect();
        assert_eq!(fired, vec![Event::CardFlipped { column: 1 }]);
    }

    #[test]
    fn face_up_top_becomes_held() {
        let (mut state, mut events) = fresh();
        state.handle_activation(single(Hit::Column { index: 2, depth: 2 }), &mut events);
        assert_eq!(
            state.selection(),
            Selection::Holding(Held {
                source: PileId::Tableau(2),
                start: 2,
            })
        );
    }

    #[test]
    fn clicks_below_the_stack_land_on_the_top_card() {
        let (mut state, mut events) = fresh();
        state.handle_activation(single(Hit::Column { index: 0, depth: 9 }), &mut events);
        assert_eq!(
            state.selection(),
            Selection::Holding(Held {
                source: PileId::Tableau(0),
                start: 0,
            })
        );
    }

    #[test]
    fn disordered_interior_card_cannot_be_held() {
        let (mut state, mut events) = fresh();
        force_card(&mut state, 2, 1, Card::new(Suit::Clubs, Rank::Nine), true);
        force_card(&mut state, 2, 2, Card::new(Suit::Spades, Rank::Eight), true);

        state.handle_activation(single(Hit::Column { index: 2, depth: 1 }), &mut events);
        assert_eq!(state.selection(), Selection::Idle);
    }

    #[test]
    fn ordered_interior_run_can_be_held() {
        let (mut state, mut events) = fresh();
        force_card(&mut state, 2, 1, Card::new(Suit::Clubs, Rank::Nine), true);
        force_card(&mut state, 2, 2, Card::new(Suit::Hearts, Rank::Eight), true);

        state.handle_activation(single(Hit::Column { index: 2, depth: 1 }), &mut events);
        assert_eq!(
            state.selection(),
            Selection::Holding(Held {
                source: PileId::Tableau(2),
                start: 1,
            })
        );
    }

    #[test]
    fn drop_always_returns_to_idle_even_when_rejected() {
        let (mut state, mut events) = fresh();
        force_card(&mut state, 0, 0, Card::new(Suit::Hearts, Rank::Four), true);
        force_card(&mut state, 1, 1, Card::new(Suit::Diamonds, Rank::Five), true);

        state.handle_activation(single(Hit::Column { index: 0, depth: 0 }), &mut events);
        assert!(matches!(state.selection(), Selection::Holding(_)));
        state.handle_activation(single(Hit::Column { index: 1, depth: 1 }), &mut events);
        assert_eq!(state.selection(), Selection::Idle);
        // Same-color drop was rejected; nothing moved.
        assert_eq!(state.tableau(0).len(), 1);
        assert_eq!(state.tableau(1).len(), 2);
    }

    #[test]
    fn successful_drop_transfers_the_card() {
        let (mut state, mut events) = fresh();
        force_card(&mut state, 0, 0, Card::new(Suit::Hearts, Rank::Four), true);
        force_card(&mut state, 1, 1, Card::new(Suit::Spades, Rank::Five), true);

        state.handle_activation(single(Hit::Column { index: 0, depth: 0 }), &mut events);
        state.handle_activation(single(Hit::Column { index: 1, depth: 1 }), &mut events);
        assert!(state.tableau(0).is_empty());
        assert_eq!(state.tableau(1).len(), 3);
        assert_eq!(state.selection(), Selection::Idle);
    }

    #[test]
    fn stock_click_advances_the_draw_pile() {
        let (mut state, mut events) = fresh();
        let before = state.draw().exposed().unwrap();
        state.handle_activation(single(Hit::Stock), &mut events);
        let after = state.draw().exposed().unwrap();
        assert_ne!(before, after);
        assert!(state.card(after).face_up);
        assert_eq!(state.selection(), Selection::Idle);
        let fired: Vec<Event> = events.drain().collect();
        assert_eq!(fired, vec![Event::DrawAdvanced]);
    }

    #[test]
    fn exposed_click_holds_the_draw_card() {
        let (mut state, mut events) = fresh();
        state.handle_activation(single(Hit::Exposed), &mut events);
        assert_eq!(
            state.selection(),
            Selection::Holding(Held {
                source: PileId::Draw,
                start: 0,
            })
        );
    }

    #[test]
    fn double_click_auto_sends_an_ace_to_the_first_free_foundation() {
        let (mut state, mut events) = fresh();
        force_card(&mut state, 0, 0, Card::new(Suit::Diamonds, Rank::Ace), true);

        state.handle_activation(double(Hit::Column { index: 0, depth: 0 }), &mut events);
        assert!(state.tableau(0).is_empty());
        assert_eq!(state.foundation(0).len(), 1);
        assert_eq!(state.selection(), Selection::Idle);
    }

    #[test]
    fn double_click_skips_foundations_that_wont_take_the_card() {
        let (mut state, mut events) = fresh();
        force_card(&mut state, 0, 0, Card::new(Suit::Diamonds, Rank::Ace), true);
        force_card(&mut state, 1, 1, Card::new(Suit::Clubs, Rank::Ace), true);
        state.handle_activation(double(Hit::Column { index: 0, depth: 0 }), &mut events);
        state.handle_activation(double(Hit::Column { index: 1, depth: 1 }), &mut events);
        // Foundation 0 holds the red ace; a black ace cannot stack there,
        // so it takes foundation 1.
        assert_eq!(state.foundation(0).len(), 1);
        assert_eq!(state.foundation(1).len(), 1);

        force_card(&mut state, 2, 2, Card::new(Suit::Hearts, Rank::Two), true);
        state.handle_activation(double(Hit::Column { index: 2, depth: 2 }), &mut events);
        // The red two builds on the red ace at foundation 0.
        assert_eq!(state.foundation(0).len(), 2);
    }

    #[test]
    fn double_click_with_no_legal_foundation_is_a_no_op() {
        let (mut state, mut events) = fresh();
        force_card(&mut state, 0, 0, Card::new(Suit::Diamonds, Rank::Nine), true);
        let before = state.clone();
        state.handle_activation(double(Hit::Column { index: 0, depth: 0 }), &mut events);
        events.drain().count();
        assert_eq!(state, before);
    }

    #[test]
    fn empty_column_click_selects_nothing() {
        let (mut state, mut events) = fresh();
        state.tableau[4].pop_from(0);
        state.handle_activation(single(Hit::Column { index: 4, depth: 0 }), &mut events);
        assert_eq!(state.selection(), Selection::Idle);
    }
}
