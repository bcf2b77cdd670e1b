//! Core game rules. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod deck;
pub mod draw;
pub mod events;
pub mod moves;
pub mod pile;
pub mod rng;
pub mod select;
pub mod state;

pub use cards::*;
pub use deck::*;
pub use draw::*;
pub use events::*;
pub use moves::*;
pub use pile::*;
pub use rng::*;
pub use select::*;
pub use state::*;
