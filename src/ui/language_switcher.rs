//! Language switcher component.
//!
//! Renders one entry per supported language on a single line. The entry
//! for the *active* language is marked with a bullet and bold text; the
//! keyboard *highlight* carries a `▶` marker. Entry order mirrors under
//! right-to-left layout.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::context::RenderContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::i18n::Language;

/// Marker shown in front of the highlighted entry.
const HIGHLIGHT_MARKER: &str = "\u{25B6} ";

/// Marker shown in front of the active entry.
const ACTIVE_MARKER: &str = "\u{25CF} ";

/// Render the switcher as a single line.
pub fn render_switcher_line(ctx: &RenderContext) -> Line<'static> {
    let mut entries: Vec<Language> = Language::all().to_vec();
    if ctx.direction().is_rtl() {
        entries.reverse();
    }

    let active = ctx.localizer.language();
    let highlighted = ctx.switcher.highlighted_language();

    let mut spans: Vec<Span<'static>> = Vec::new();
    for (idx, language) in entries.iter().enumerate() {
        let is_active = *language == active;
        let is_highlighted = *language == highlighted;
        let label = ctx.t(language.label_key());

        let marker_style = if is_highlighted {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let marker = if is_highlighted {
            HIGHLIGHT_MARKER
        } else if is_active {
            ACTIVE_MARKER
        } else {
            "  "
        };
        spans.push(Span::styled(marker.to_string(), marker_style));

        let label_style = if is_active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(label, label_style));

        if idx < entries.len() - 1 {
            spans.push(Span::raw("   ".to_string()));
        }
    }

    Line::from(spans)
}
