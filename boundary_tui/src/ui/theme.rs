use ratatui::style::{Color, Modifier, Style};

/// Neon-green terminal theme, with one accent per plotted series.
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(0, 0, 0);
    pub const FG_NEON: Color = Color::Rgb(57, 255, 20);
    pub const FG_DIM: Color = Color::Rgb(0, 190, 0);
    pub const FG_MUTED: Color = Color::Rgb(80, 90, 80);

    // Series
    pub const CLASS0: Color = Color::Rgb(0, 255, 255);
    pub const CLASS1: Color = Color::Rgb(255, 0, 255);
    pub const BOUNDARY: Color = Color::Rgb(255, 255, 0);

    pub const ACCENT_RED: Color = Color::Rgb(255, 70, 70);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_NEON)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG_NEON)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    /// Key names in hint rows.
    pub fn key() -> Style {
        Style::default()
            .fg(Self::CLASS0)
            .add_modifier(Modifier::BOLD)
    }

    pub fn class0() -> Style {
        Style::default().fg(Self::CLASS0)
    }

    pub fn class1() -> Style {
        Style::default().fg(Self::CLASS1)
    }

    pub fn boundary() -> Style {
        Style::default()
            .fg(Self::BOUNDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Phase badge colour: running stands out, empty fades.
    pub fn phase(running: bool, empty: bool) -> Style {
        match (running, empty) {
            (true, _) => Self::boundary(),
            (false, true) => Self::muted(),
            (false, false) => Self::title(),
        }
    }
}
