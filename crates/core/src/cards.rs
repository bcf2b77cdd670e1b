use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn color(self) -> SuitColor {
        match self {
            Suit::Hearts | Suit::Diamonds => SuitColor::Red,
            Suit::Clubs | Suit::Spades => SuitColor::Black,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }
}

/// The two-valued classification the stacking rules actually compare.
/// Display suits map onto it; the rules never look at the suit itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SuitColor {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }

    pub fn face(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn color(&self) -> SuitColor {
        self.suit.color()
    }
}

/// Tableau stacking: an empty column takes a King only; otherwise the moving
/// card sits one rank below the resident top with the opposite color.
pub fn fits_on_tableau(top: Option<Card>, moving: Card) -> bool {
    match top {
        None => moving.rank == Rank::King,
        Some(top) => top.rank.value() == moving.rank.value() + 1 && top.color() != moving.color(),
    }
}

/// Foundation stacking: an empty foundation takes an Ace of either color;
/// otherwise the moving card sits one rank above the resident top with the
/// SAME color. Color, not exact suit: red aces build on either red pile.
pub fn fits_on_foundation(top: Option<Card>, moving: Card) -> bool {
    match top {
        None => moving.rank == Rank::Ace,
        Some(top) => moving.rank.value() == top.rank.value() + 1 && moving.color() == top.color(),
    }
}

/// A run is movable as a unit only when every consecutive pair descends by
/// exactly one rank with alternating colors.
pub fn run_is_ordered(run: &[Card]) -> bool {
    run.windows(2).all(|pair| {
        pair[0].rank.value() == pair[1].rank.value() + 1 && pair[0].color() != pair[1].color()
    })
}
