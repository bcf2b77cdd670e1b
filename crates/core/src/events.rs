use crate::PileId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    GameDealt { seed: u64 },
    CardFlipped { column: usize },
    RunMoved { from: PileId, to: PileId, count: usize },
    DrawAdvanced,
    DrawCardPlayed { to: PileId },
    DrawExhausted,
    GameWon,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
