use boundary_core::Command;
use crossterm::event::KeyCode;

use crate::state::App;

use super::{load::LoadState, menu::MenuState, Action, Screen};

/// Maps a viewer key to the session command it triggers, if any.
pub fn command_for(key: KeyCode) -> Option<Command> {
    let cmd = match key {
        KeyCode::Char('s') | KeyCode::Right => Command::Step,
        KeyCode::Char(' ') | KeyCode::Char('a') => Command::ToggleAnimate,
        KeyCode::Char('0') => Command::Reset,
        KeyCode::Char('+') | KeyCode::Char('=') => Command::Faster,
        KeyCode::Char('-') => Command::Slower,
        KeyCode::Char('r') => Command::Regenerate,
        KeyCode::Char('e') => Command::Export,
        _ => return None,
    };
    Some(cmd)
}

pub fn handle_key(key: KeyCode, app: &mut App) -> Action {
    match key {
        KeyCode::Char('l') => {
            Action::Transition(Screen::LoadWeights(LoadState::new(&app.weights_path)))
        }
        KeyCode::Char('q') | KeyCode::Esc => Action::Transition(Screen::Menu(MenuState::new())),
        _ => {
            if let Some(cmd) = command_for(key) {
                app.dispatch(cmd);
            }
            Action::None
        }
    }
}
