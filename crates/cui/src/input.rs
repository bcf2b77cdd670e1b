use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    None,
    Quit,
    NewGame,
    ToggleHelp,
    Click { x: u16, y: u16 },
}

pub fn map_key(key: KeyEvent) -> UiAction {
    match key.code {
        KeyCode::Char('q') => UiAction::Quit,
        KeyCode::Char('n') => UiAction::NewGame,
        KeyCode::Char('?') => UiAction::ToggleHelp,
        KeyCode::Esc => UiAction::ToggleHelp,
        _ => UiAction::None,
    }
}

pub fn map_mouse(mouse: MouseEvent) -> UiAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => UiAction::Click {
            x: mouse.column,
            y: mouse.row,
        },
        _ => UiAction::None,
    }
}
