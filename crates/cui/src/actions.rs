use crate::app::App;
use crate::input::UiAction;

pub fn dispatch(app: &mut App, action: UiAction) {
    match action {
        UiAction::None => {}
        UiAction::Quit => app.should_quit = true,
        UiAction::NewGame => app.new_game(),
        UiAction::ToggleHelp => app.show_help = !app.show_help,
        UiAction::Click { x, y } => app.on_click(x, y),
    }
}
