use crate::layout;
use patience_core::{Activation, ActivationKind, Event, EventBus, GameState, PileId, RngState};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_EVENT_LOG: usize = 100;
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

pub struct App {
    pub game: GameState,
    pub events: EventBus,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
    last_click: Option<(Instant, (u16, u16))>,
}

impl App {
    pub fn new(seed: u64) -> Self {
        let mut events = EventBus::default();
        let game = GameState::deal(seed, &mut events);
        let mut app = Self {
            game,
            events,
            event_log: VecDeque::new(),
            status_line: "click a card to pick it up, ? for help".to_string(),
            show_help: false,
            should_quit: false,
            last_click: None,
        };
        app.drain_events();
        app
    }

    /// A new game is a fresh aggregate under a fresh seed; nothing from the
    /// previous deal survives.
    pub fn new_game(&mut self) {
        let seed = RngState::from_entropy().seed();
        self.game = GameState::deal(seed, &mut self.events);
        self.last_click = None;
        self.status_line = "click a card to pick it up, ? for help".to_string();
        self.drain_events();
    }

    /// Raw pointer press from the terminal. Two presses on the same cell
    /// within the double-click window count as a double activation.
    pub fn on_click(&mut self, x: u16, y: u16) {
        let now = Instant::now();
        let kind = if is_double_click(self.last_click, now, (x, y)) {
            self.last_click = None;
            ActivationKind::Double
        } else {
            self.last_click = Some((now, (x, y)));
            ActivationKind::Single
        };
        self.apply_click(x, y, kind);
    }

    /// Replay a scripted click sequence through the normal dispatch path.
    pub fn apply_script(&mut self, clicks: &[crate::persistence::ScriptedClick]) {
        for click in clicks {
            let kind = if click.double {
                ActivationKind::Double
            } else {
                ActivationKind::Single
            };
            self.apply_click(click.x, click.y, kind);
        }
    }

    pub fn apply_click(&mut self, x: u16, y: u16, kind: ActivationKind) {
        if let Some(hit) = layout::hit_test(x, y) {
            self.game
                .handle_activation(Activation { kind, hit }, &mut self.events);
        }
        self.drain_events();
    }

    fn drain_events(&mut self) {
        let drained: Vec<Event> = self.events.drain().collect();
        for event in drained {
            if event == Event::GameWon {
                self.status_line =
                    "you won! press n for a new deal, q to quit".to_string();
            }
            self.event_log.push_front(describe(&event));
            self.event_log.truncate(MAX_EVENT_LOG);
        }
    }
}

fn is_double_click(
    last: Option<(Instant, (u16, u16))>,
    now: Instant,
    pos: (u16, u16),
) -> bool {
    match last {
        Some((at, there)) => there == pos && now.duration_since(at) <= DOUBLE_CLICK_WINDOW,
        None => false,
    }
}

fn pile_label(pile: PileId) -> String {
    match pile {
        PileId::Tableau(i) => format!("column {}", i + 1),
        PileId::Foundation(i) => format!("foundation {}", i + 1),
        PileId::Draw => "the draw pile".to_string(),
    }
}

fn describe(event: &Event) -> String {
    match event {
        Event::GameDealt { seed } => format!("new deal, seed {seed}"),
        Event::CardFlipped { column } => format!("flipped the top of column {}", column + 1),
        Event::RunMoved { from, to, count } => {
            format!("moved {count} card(s) from {} to {}", pile_label(*from), pile_label(*to))
        }
        Event::DrawAdvanced => "browsed the draw pile".to_string(),
        Event::DrawCardPlayed { to } => format!("played the draw card to {}", pile_label(*to)),
        Event::DrawExhausted => "the draw pile is used up".to_string(),
        Event::GameWon => "all columns cleared".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{STOCK_Y, SIDE_X0};

    #[test]
    fn bootstrap_logs_the_deal() {
        let app = App::new(9);
        assert_eq!(app.game.seed(), 9);
        assert_eq!(app.event_log.front().map(String::as_str), Some("new deal, seed 9"));
    }

    #[test]
    fn double_click_needs_same_cell_and_short_gap() {
        let now = Instant::now();
        assert!(!is_double_click(None, now, (3, 4)));
        assert!(is_double_click(
            Some((now - Duration::from_millis(100), (3, 4))),
            now,
            (3, 4)
        ));
        assert!(!is_double_click(
            Some((now - Duration::from_millis(100), (3, 5))),
            now,
            (3, 4)
        ));
        assert!(!is_double_click(
            Some((now - Duration::from_millis(900), (3, 4))),
            now,
            (3, 4)
        ));
    }

    #[test]
    fn stock_click_shows_up_in_the_log() {
        let mut app = App::new(9);
        let before = app.game.draw().exposed();
        app.apply_click(SIDE_X0 + 1, STOCK_Y + 1, ActivationKind::Single);
        assert_ne!(app.game.draw().exposed(), before);
        assert_eq!(
            app.event_log.front().map(String::as_str),
            Some("browsed the draw pile")
        );
    }

    #[test]
    fn clicks_outside_every_region_do_nothing() {
        let mut app = App::new(9);
        let log_len = app.event_log.len();
        app.apply_click(0, 0, ActivationKind::Single);
        assert_eq!(app.event_log.len(), log_len);
    }
}
