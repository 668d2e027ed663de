use ratatui::{widgets::Block, Frame};

use crate::state::App;

use super::{layout, theme::Theme, widgets};

/// Draws the viewer: header, chart, status, key hints and event log.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header_area, body_area, logs_area) = layout::vertical(area);
    let (chart_area, side_area) = layout::body(body_area);
    let (status_area, keys_area) = layout::side(side_area);

    let status = app.session.status();

    f.render_widget(widgets::header(&status), header_area);
    f.render_widget(widgets::chart(app.session.plot().frame()), chart_area);
    f.render_widget(widgets::status(&status), status_area);
    f.render_widget(widgets::keys(), keys_area);
    f.render_widget(widgets::logs(&app.logs), logs_area);
}
