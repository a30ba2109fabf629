//! Header component: application title, subtitle, and the language
//! switcher.
//!
//! Title and subtitle sit at the line start for the active direction;
//! the switcher sits at the line end, mirroring the web layout where the
//! switcher occupies the far corner of the header.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::context::RenderContext;
use super::language_switcher::render_switcher_line;
use super::theme::{COLOR_DIM, COLOR_HEADER};

/// Render the header.
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `area` - The rectangle allocated for the header (3 rows)
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    if area.height == 0 {
        return;
    }

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    let title = Paragraph::new(Line::styled(
        ctx.t("header.title"),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(ctx.text_alignment());
    frame.render_widget(title, rows[0]);

    if area.height >= 2 {
        let subtitle = Paragraph::new(Line::styled(
            ctx.t("header.subtitle"),
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(ctx.text_alignment());
        frame.render_widget(subtitle, rows[1]);
    }

    if area.height >= 3 {
        let switcher =
            Paragraph::new(render_switcher_line(ctx)).alignment(ctx.end_alignment());
        frame.render_widget(switcher, rows[2]);
    }
}
