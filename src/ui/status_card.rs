//! Backend status card.
//!
//! A bordered card showing the outcome of the startup health probe: a
//! colored indicator dot plus the translated status text. While the
//! probe is outstanding the dot is a spinner.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::context::RenderContext;
use super::theme::{COLOR_BORDER, COLOR_STATUS_ERR, COLOR_STATUS_OK, COLOR_STATUS_WAIT};
use crate::domain::BackendStatus;

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Indicator character and color for a status.
fn status_indicator(status: BackendStatus, spinner_frame: usize) -> (char, Color) {
    match status {
        BackendStatus::Checking => (get_spinner_char(spinner_frame), COLOR_STATUS_WAIT),
        BackendStatus::Connected => ('\u{25CF}', COLOR_STATUS_OK),
        BackendStatus::Disconnected => ('\u{25CB}', COLOR_STATUS_ERR),
    }
}

/// Render the status card.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let block = Block::bordered()
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(ctx.t("status.title"))
        .title_alignment(ctx.text_alignment());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let status = ctx.connection.status();
    let (dot, color) = status_indicator(status, ctx.spinner_frame);
    let dot_span = Span::styled(format!("{} ", dot), Style::default().fg(color));
    let text_span = Span::styled(
        format!("Backend: {}", ctx.t(ctx.connection.status_key())),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );

    // RTL puts the indicator dot at the line end
    let line = if ctx.direction().is_rtl() {
        Line::from(vec![text_span, Span::raw(" "), dot_span])
    } else {
        Line::from(vec![dot_span, text_span])
    };

    let paragraph = Paragraph::new(line).alignment(ctx.text_alignment());
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_frames_wrap() {
        assert_eq!(get_spinner_char(0), '◐');
        assert_eq!(get_spinner_char(3), '◒');
        assert_eq!(get_spinner_char(4), '◐');
    }

    #[test]
    fn test_indicator_per_status() {
        let (dot, color) = status_indicator(BackendStatus::Connected, 0);
        assert_eq!(dot, '\u{25CF}');
        assert_eq!(color, COLOR_STATUS_OK);

        let (dot, color) = status_indicator(BackendStatus::Disconnected, 0);
        assert_eq!(dot, '\u{25CB}');
        assert_eq!(color, COLOR_STATUS_ERR);

        let (dot, color) = status_indicator(BackendStatus::Checking, 1);
        assert_eq!(dot, '◓');
        assert_eq!(color, COLOR_STATUS_WAIT);
    }
}
