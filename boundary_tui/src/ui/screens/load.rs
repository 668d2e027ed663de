use std::fs;

use boundary_core::Command;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::App;
use crate::ui::{layout::centered_rect, theme::Theme, widgets};

use super::{Action, Screen};

const DEFAULT_WEIGHTS_PATH: &str = "weights.csv";

const FORMAT_HELP: &[&str] = &[
    "w0,w1,w2",
    "0.0,0.0,1.0",
    "-4.5,0.4,0.6",
    "-10.0,1.0,1.0",
    "",
    "one row per training step, line w0 + w1*x1 + w2*x2 = 0",
    "header optional, blank lines ignored",
    "rows without three numbers are skipped",
];

/// Path prompt for a weights CSV.
pub struct LoadState {
    path: String,
    show_format: bool,
    pub error: Option<String>,
}

impl LoadState {
    /// Creates the prompt, pre-filled with `path`.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            show_format: false,
            error: None,
        }
    }

    /// Applies a key to the path field. `?` opens the format help while the
    /// field is empty and is typed like any other character otherwise.
    fn edit(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('?') if self.path.is_empty() => self.show_format = true,
            KeyCode::Char(c) => self.path.push(c),
            KeyCode::Backspace => {
                self.path.pop();
            }
            _ => {}
        }
    }

    /// The typed path, or the default when nothing was typed.
    pub fn resolved_path(&self) -> &str {
        match self.path.trim() {
            "" => DEFAULT_WEIGHTS_PATH,
            path => path,
        }
    }
}

pub fn handle_key(state: &mut LoadState, key: KeyCode, app: &mut App) -> Action {
    state.error = None;

    if state.show_format {
        state.show_format = false;
        return Action::None;
    }

    match key {
        KeyCode::Enter => submit(state, app),
        KeyCode::Esc => Action::Transition(Screen::Viewer),
        _ => {
            state.edit(key);
            Action::None
        }
    }
}

fn submit(state: &mut LoadState, app: &mut App) -> Action {
    let path = state.resolved_path().to_string();

    match fs::read_to_string(&path) {
        Ok(text) => {
            app.weights_path = path;
            app.dispatch(Command::LoadWeights(text));
            Action::Transition(Screen::Viewer)
        }
        Err(e) => {
            log::warn!("cannot read weights '{path}': {e}");
            state.error = Some(format!("cannot read '{path}': {e}"));
            Action::None
        }
    }
}

pub fn draw(f: &mut Frame, state: &LoadState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(centered_rect(60, 60, area));

    draw_input(f, rows[0], &state.path);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("empty loads ./{DEFAULT_WEIGHTS_PATH}"),
            Theme::muted(),
        )),
        rows[1],
    );

    if state.show_format {
        let help = FORMAT_HELP
            .iter()
            .map(|l| Line::from(Span::styled(*l, Theme::dim())))
            .collect::<Vec<_>>();
        f.render_widget(
            Paragraph::new(help).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border())
                    .title(" format ")
                    .title_style(Theme::title()),
            ),
            rows[2],
        );
        f.render_widget(widgets::hint_line(&[("any key", "close")]), rows[3]);
    } else {
        f.render_widget(
            widgets::hint_line(&[("enter", "load"), ("? (empty)", "format"), ("esc", "back")]),
            rows[3],
        );
    }

    if let Some(err) = &state.error {
        let bar = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        f.render_widget(widgets::error_bar(err), bar);
    }
}

fn draw_input(f: &mut Frame, area: Rect, current: &str) {
    let text = match current {
        "" => Span::styled(DEFAULT_WEIGHTS_PATH, Theme::muted()),
        path => Span::styled(path, Theme::text()),
    };

    f.render_widget(
        Paragraph::new(Line::from(vec![text, Span::styled("█", Theme::key())])).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" weights file ")
                .title_style(Theme::title()),
        ),
        area,
    );
}
