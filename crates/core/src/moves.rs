use crate::{run_is_ordered, Event, EventBus, GameState, PileId};
use thiserror::Error;

/// Why a move was refused. The selection machine swallows these so the
/// player just sees nothing happen; tests assert the precise cause.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("no draw card is exposed")]
    NothingExposed,
    #[error("no card at the selected position")]
    BadSource,
    #[error("cards cannot move onto the draw pile")]
    BadDestination,
    #[error("selected cards are not a movable run")]
    NotWellOrdered,
    #[error("foundations take one card at a time")]
    FoundationNeedsSingleCard,
    #[error("destination does not accept the cards")]
    WontStack,
}

impl GameState {
    /// Relocate the contiguous run `start..top` of a tableau column as a
    /// unit. All validation happens before either pile is touched, so a
    /// rejected move leaves the game byte-for-byte unchanged.
    pub fn move_run(
        &mut self,
        from_col: usize,
        start: usize,
        to: PileId,
        events: &mut EventBus,
    ) -> Result<(), MoveError> {
        let from = PileId::Tableau(from_col as u8);
        if matches!(to, PileId::Draw) {
            return Err(MoveError::BadDestination);
        }
        if to == from {
            return Err(MoveError::WontStack);
        }
        if start >= self.tableau[from_col].len() {
            return Err(MoveError::BadSource);
        }

        let run = self.run_cards(from_col, start);
        if matches!(to, PileId::Foundation(_)) && run.len() > 1 {
            return Err(MoveError::FoundationNeedsSingleCard);
        }
        if !run_is_ordered(&run) {
            return Err(MoveError::NotWellOrdered);
        }
        let top = self.top_card(to);
        if !self.stack(to).can_accept(top, &run) {
            return Err(MoveError::WontStack);
        }

        let ids = self.tableau[from_col].pop_from(start);
        let count = ids.len();
        self.stack_mut(to).push_run(&ids);
        self.restamp(from);
        self.restamp(to);
        events.push(Event::RunMoved { from, to, count });
        self.check_win(events);
        Ok(())
    }

    /// Play the exposed draw card. On success the card leaves the draw pile
    /// for good and the next remaining card becomes exposed.
    pub fn move_from_draw(&mut self, to: PileId, events: &mut EventBus) -> Result<(), MoveError> {
        if matches!(to, PileId::Draw) {
            return Err(MoveError::BadDestination);
        }
        let id = self.draw.exposed().ok_or(MoveError::NothingExposed)?;
        let moving = self.cards[id.0].card;
        let top = self.top_card(to);
        if !self.stack(to).can_accept(top, &[moving]) {
            return Err(MoveError::WontStack);
        }

        self.draw.remove_exposed();
        if let Some(next) = self.draw.exposed() {
            self.flip_up(next);
        }
        self.stack_mut(to).push_run(&[id]);
        self.restamp(PileId::Draw);
        self.restamp(to);
        events.push(Event::DrawCardPlayed { to });
        if self.draw.is_exhausted() {
            events.push(Event::DrawExhausted);
        }
        self.check_win(events);
        Ok(())
    }

    /// Browse the draw pile to its next remaining card.
    pub fn advance_draw(&mut self, events: &mut EventBus) {
        if let Some(next) = self.draw.advance() {
            self.flip_up(next);
            events.push(Event::DrawAdvanced);
        }
    }
}
