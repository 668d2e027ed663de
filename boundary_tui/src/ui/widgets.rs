use boundary_core::{Phase, Status};
use ratatui::{
    layout::Alignment,
    style::Modifier,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
};

use crate::{state::model::LogLine, surface::ChartFrame};

use super::theme::Theme;

/// Viewer key bindings, shown in the side panel.
pub const KEYS: &[(&str, &str)] = &[
    ("s / →", "step"),
    ("space", "animate / pause"),
    ("0", "reset"),
    ("+ / -", "faster / slower"),
    ("l", "load weights"),
    ("r", "regenerate"),
    ("e", "export csv"),
    ("esc", "menu"),
];

fn block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(format!(" {title} "))
        .title_style(Theme::title())
}

pub fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Empty => "EMPTY",
        Phase::Ready => "READY",
        Phase::Running => "RUNNING",
    }
}

/// `baseline`, or the 1-based step out of the total.
pub fn position(status: &Status) -> String {
    match status.cursor {
        None => "baseline".into(),
        Some(i) => format!("{} / {}", i + 1, status.steps),
    }
}

pub fn header(status: &Status) -> Paragraph<'static> {
    let phase = status.phase;
    let line1 = Line::from(vec![
        Span::styled(
            "Decision Boundary Viewer",
            Theme::title().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  |  ", Theme::muted()),
        Span::styled(
            phase_label(phase),
            Theme::phase(phase == Phase::Running, phase == Phase::Empty),
        ),
    ]);

    let line2 = Line::from(Span::styled(status.message.clone(), Theme::dim()));

    Paragraph::new(vec![line1, line2])
        .block(block("Overview"))
        .wrap(Wrap { trim: true })
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let [lo, hi] = bounds;
    [lo, (lo + hi) / 2.0, hi]
        .iter()
        .map(|v| Span::styled(format!("{v:.1}"), Theme::muted()))
        .collect()
}

pub fn chart(frame: &ChartFrame) -> Chart<'_> {
    let datasets = vec![
        Dataset::default()
            .name("y = 0")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Theme::class0())
            .data(&frame.class0),
        Dataset::default()
            .name("y = 1")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Theme::class1())
            .data(&frame.class1),
        Dataset::default()
            .name("boundary")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::boundary())
            .data(&frame.boundary),
    ];

    Chart::new(datasets)
        .block(block("Dataset"))
        .x_axis(
            Axis::default()
                .title("x1")
                .style(Theme::dim())
                .bounds(frame.x_bounds)
                .labels(axis_labels(frame.x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("x2")
                .style(Theme::dim())
                .bounds(frame.y_bounds)
                .labels(axis_labels(frame.y_bounds)),
        )
}

pub fn status(status: &Status) -> Paragraph<'static> {
    let weights = match status.weights {
        Some(w) => format!("{:.3}, {:.3}, {:.3}", w.w0, w.w1, w.w2),
        None => "-".into(),
    };

    let row = |k: &'static str, v: String| {
        Line::from(vec![
            Span::styled(format!("{k:<10}"), Theme::muted()),
            Span::styled(v, Theme::text()),
        ])
    };

    let lines = vec![
        row("step", position(status)),
        row("weights", weights),
        row("line", (if status.has_line { "drawn" } else { "none" }).into()),
        row("interval", format!("{} ms", status.interval.as_millis())),
        row("seed", status.seed.to_string()),
        row("points", status.points.to_string()),
    ];

    Paragraph::new(lines).block(block("Status"))
}

pub fn keys() -> Paragraph<'static> {
    let lines = KEYS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:<8}"), Theme::key()),
                Span::styled(*action, Theme::dim()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines).block(block("Keys"))
}

pub fn logs(logs: &[LogLine]) -> Paragraph<'_> {
    let tail = logs.iter().rev().take(6).rev();

    let lines = tail
        .map(|l| {
            let style = if l.level == "ERROR" {
                Theme::error()
            } else {
                Theme::dim()
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), style),
                Span::styled(l.message.as_str(), style),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(block("Events"))
        .wrap(Wrap { trim: true })
}

/// One centered row of `[key] action` pairs.
pub fn hint_line(hints: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let spans = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!("[{key}] "), Theme::key()),
                Span::styled(format!("{action}   "), Theme::dim()),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

pub fn error_bar(msg: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(vec![
        Span::styled(" ✖ ", Theme::error()),
        Span::styled(msg, Theme::error()),
    ]))
}
