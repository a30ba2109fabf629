//! Footer component: centered tagline plus keybind hints.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::context::RenderContext;
use super::theme::COLOR_DIM;

/// Render the footer.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    if area.height == 0 {
        return;
    }

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    let text = Paragraph::new(Line::styled(
        ctx.t("footer.text"),
        Style::default().fg(COLOR_DIM),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(text, rows[0]);

    if area.height >= 2 {
        let hints = Paragraph::new(Line::styled(
            ctx.t("footer.hints"),
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hints, rows[1]);
    }
}
