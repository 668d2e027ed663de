use boundary_core::Status;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::state::App;
use crate::ui::{layout::centered_rect, theme::Theme, widgets};

use super::{load::LoadState, Action, Screen};

const BANNER: &[&str] = &[
    "  o  o  .      x  x",
    " o o  o  .   x x  x",
    "  o  o    .   x  x ",
    "           .       ",
    "   boundary-viz    ",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Viewer,
    LoadWeights,
    Quit,
}

impl Entry {
    const ALL: [Entry; 3] = [Entry::Viewer, Entry::LoadWeights, Entry::Quit];

    fn label(self) -> &'static str {
        match self {
            Entry::Viewer => "Open Viewer",
            Entry::LoadWeights => "Load Weights",
            Entry::Quit => "Quit",
        }
    }
}

pub struct MenuState {
    list: ListState,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            list: ListState::default().with_selected(Some(0)),
        }
    }

    fn entry(&self) -> Entry {
        let i = self.list.selected().unwrap_or(0);
        Entry::ALL[i.min(Entry::ALL.len() - 1)]
    }

    fn shift(&mut self, forward: bool) {
        let i = self.list.selected().unwrap_or(0);
        let next = match forward {
            true => (i + 1).min(Entry::ALL.len() - 1),
            false => i.saturating_sub(1),
        };
        self.list.select(Some(next));
    }
}

pub fn handle_key(state: &mut MenuState, key: KeyCode, app: &mut App) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => state.shift(false),
        KeyCode::Down | KeyCode::Char('j') => state.shift(true),
        KeyCode::Enter => {
            return match state.entry() {
                Entry::Viewer => Action::Transition(Screen::Viewer),
                Entry::LoadWeights => {
                    Action::Transition(Screen::LoadWeights(LoadState::new(&app.weights_path)))
                }
                Entry::Quit => Action::Quit,
            };
        }
        KeyCode::Char('q') => return Action::Quit,
        _ => {}
    }
    Action::None
}

pub fn draw(f: &mut Frame, state: &MenuState, app: &App) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER.len() as u16 + 1),
            Constraint::Length(Entry::ALL.len() as u16 + 2),
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(centered_rect(50, 70, area));

    let banner = BANNER
        .iter()
        .map(|l| Line::from(Span::styled(*l, Theme::title())))
        .collect::<Vec<_>>();
    f.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        rows[0],
    );

    draw_entries(f, rows[1], state);
    draw_summary(f, rows[2], &app.session.status());

    f.render_widget(
        widgets::hint_line(&[("↑↓", "move"), ("enter", "open"), ("q", "quit")]),
        rows[4],
    );
}

fn draw_entries(f: &mut Frame, area: Rect, state: &MenuState) {
    let items = Entry::ALL
        .iter()
        .map(|e| ListItem::new(e.label()))
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" MENU ")
                .title_style(Theme::title()),
        )
        .style(Theme::dim())
        .highlight_style(Theme::title())
        .highlight_symbol("▶ ");

    let mut list_state = state.list.clone();
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_summary(f: &mut Frame, area: Rect, status: &Status) {
    let steps = match status.steps {
        0 => "none".to_string(),
        n => n.to_string(),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("seed      ", Theme::muted()),
            Span::styled(status.seed.to_string(), Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("points    ", Theme::muted()),
            Span::styled(status.points.to_string(), Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("weights   ", Theme::muted()),
            Span::styled(steps, Theme::text()),
        ]),
        Line::from(Span::styled(status.message.clone(), Theme::dim())),
    ];

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" SESSION ")
                .title_style(Theme::title()),
        ),
        area,
    );
}
