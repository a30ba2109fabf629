//! UI rendering for the ragdeck dashboard.
//!
//! One screen: header with the language switcher, the backend status
//! card, three feature cards, and a footer. Every render function
//! receives a [`RenderContext`] carrying the localization context, so
//! text and layout direction are decided per frame from state.

mod context;
mod feature_cards;
mod footer;
mod header;
mod helpers;
mod language_switcher;
mod layout;
mod status_card;
mod theme;

pub use context::RenderContext;
pub use helpers::truncate_to_width;
pub use language_switcher::render_switcher_line;
pub use layout::{breakpoints, LayoutContext};
pub use status_card::get_spinner_char;
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_STATUS_ERR, COLOR_STATUS_OK,
    COLOR_STATUS_WAIT,
};

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Render the whole UI for one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = LayoutContext::new(area.width, area.height);
    let ctx = RenderContext::from_app(app, layout);

    if !layout.is_usable() {
        let notice = Paragraph::new(Line::styled(
            "terminal too small",
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(notice, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .split(area);

    header::render(frame, chunks[0], &ctx);
    status_card::render(frame, chunks[1], &ctx);
    feature_cards::render(frame, chunks[2], &ctx);
    footer::render(frame, chunks[3], &ctx);
}
