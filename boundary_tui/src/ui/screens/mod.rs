pub mod load;
pub mod menu;
pub mod viewer;

use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::state::App;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Viewer,
    LoadWeights(load::LoadState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame, app: &App) {
        match self {
            Screen::Menu(s) => menu::draw(f, s, app),
            Screen::Viewer => crate::ui::draw::draw(f, app),
            Screen::LoadWeights(s) => load::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, app: &mut App) -> Action {
        match self {
            Screen::Menu(s) => menu::handle_key(s, key, app),
            Screen::Viewer => viewer::handle_key(key, app),
            Screen::LoadWeights(s) => load::handle_key(s, key, app),
        }
    }
}
