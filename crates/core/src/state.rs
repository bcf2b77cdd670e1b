use crate::{
    shuffled_deck, Card, CardId, DrawPile, Event, EventBus, Pile, PileId, PileKind, RngState,
    Selection, DECK_SIZE,
};
use serde::{Deserialize, Serialize};

pub const TABLEAU_COLUMNS: usize = 7;
pub const FOUNDATION_PILES: usize = 4;
pub const TABLEAU_DEAL: usize = 28;
pub const DRAW_DEAL: usize = DECK_SIZE - TABLEAU_DEAL;

/// Arena entry: immutable identity plus the mutable placement state that is
/// restamped on every pile mutation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardSlot {
    pub card: Card,
    pub face_up: bool,
    pub pile: PileId,
    pub depth: usize,
}

/// The whole game: card arena, seven tableau columns, four foundations, the
/// draw pile and the current selection. A new game is a new aggregate; the
/// previous one is simply dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub(crate) cards: Vec<CardSlot>,
    pub(crate) tableau: [Pile; TABLEAU_COLUMNS],
    pub(crate) foundations: [Pile; FOUNDATION_PILES],
    pub(crate) draw: DrawPile,
    pub(crate) selection: Selection,
    pub(crate) won: bool,
    seed: u64,
}

impl GameState {
    /// Shuffle and deal: column i gets i+1 cards face-down with the last
    /// one flipped, the remaining 24 become the draw pile in dealt order
    /// with the first card exposed face-up.
    pub fn deal(seed: u64, events: &mut EventBus) -> Self {
        let mut rng = RngState::from_seed(seed);
        let order = shuffled_deck(&mut rng);
        let cards: Vec<CardSlot> = order
            .into_iter()
            .map(|card| CardSlot {
                card,
                face_up: false,
                pile: PileId::Draw,
                depth: 0,
            })
            .collect();

        let mut state = Self {
            cards,
            tableau: std::array::from_fn(|_| Pile::new(PileKind::Tableau)),
            foundations: std::array::from_fn(|_| Pile::new(PileKind::Foundation)),
            draw: DrawPile::default(),
            selection: Selection::Idle,
            won: false,
            seed,
        };

        let mut next = 0;
        for col in 0..TABLEAU_COLUMNS {
            for _ in 0..=col {
                state.tableau[col].push_run(&[CardId(next)]);
                next += 1;
            }
            if let Some(top) = state.tableau[col].top() {
                state.cards[top.0].face_up = true;
            }
            state.restamp(PileId::Tableau(col as u8));
        }

        state.draw = DrawPile::new((next..DECK_SIZE).map(CardId).collect());
        state.restamp(PileId::Draw);
        if let Some(exposed) = state.draw.exposed() {
            state.cards[exposed.0].face_up = true;
        }

        events.push(Event::GameDealt { seed });
        state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn card(&self, id: CardId) -> &CardSlot {
        &self.cards[id.0]
    }

    pub fn tableau(&self, index: usize) -> &Pile {
        &self.tableau[index]
    }

    pub fn foundation(&self, index: usize) -> &Pile {
        &self.foundations[index]
    }

    pub fn draw(&self) -> &DrawPile {
        &self.draw
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub(crate) fn stack(&self, pile: PileId) -> &Pile {
        match pile {
            PileId::Tableau(i) => &self.tableau[i as usize],
            PileId::Foundation(i) => &self.foundations[i as usize],
            PileId::Draw => unreachable!("the draw pile is not a stacking pile"),
        }
    }

    pub(crate) fn stack_mut(&mut self, pile: PileId) -> &mut Pile {
        match pile {
            PileId::Tableau(i) => &mut self.tableau[i as usize],
            PileId::Foundation(i) => &mut self.foundations[i as usize],
            PileId::Draw => unreachable!("the draw pile is not a stacking pile"),
        }
    }

    pub(crate) fn top_card(&self, pile: PileId) -> Option<Card> {
        self.stack(pile).top().map(|id| self.cards[id.0].card)
    }

    /// Identities of the run `start..top` of a column, base-first.
    pub(crate) fn run_cards(&self, col: usize, start: usize) -> Vec<Card> {
        self.tableau[col].cards()[start..]
            .iter()
            .map(|id| self.cards[id.0].card)
            .collect()
    }

    /// Re-stamp owner and dense depth on every card of a pile. Runs after
    /// every mutating pile operation so lookups and rendering never see a
    /// stale placement.
    pub(crate) fn restamp(&mut self, pile: PileId) {
        let ids: Vec<CardId> = match pile {
            PileId::Draw => self.draw.cards().to_vec(),
            _ => self.stack(pile).cards().to_vec(),
        };
        for (depth, id) in ids.into_iter().enumerate() {
            let slot = &mut self.cards[id.0];
            slot.pile = pile;
            slot.depth = depth;
        }
    }

    pub(crate) fn flip_up(&mut self, id: CardId) {
        self.cards[id.0].face_up = true;
    }

    /// Win = every tableau column cleared. Foundations are not inspected:
    /// with all 52 cards accounted for, an empty tableau plus an exhausted
    /// draw pile leaves them nowhere else to be.
    pub(crate) fn check_win(&mut self, events: &mut EventBus) {
        if self.won {
            return;
        }
        if self.tableau.iter().all(Pile::is_empty) {
            self.won = true;
            events.push(Event::GameWon);
        }
    }
}
