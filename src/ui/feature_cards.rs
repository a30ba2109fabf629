//! Feature cards: upload, chat, and analytics.
//!
//! Three bordered cards, side by side on normal terminals and stacked on
//! compact ones. Horizontal card order mirrors under right-to-left
//! layout.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use super::context::RenderContext;
use super::helpers::truncate_to_width;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Feature identifiers, in display order. Each maps to the
/// `features.{id}.*` catalog namespace.
pub const FEATURES: [&str; 3] = ["upload", "chat", "analytics"];

fn feature_key(id: &str, field: &str) -> String {
    format!("features.{}.{}", id, field)
}

/// Render the three feature cards.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let mut features: Vec<&str> = FEATURES.to_vec();

    let areas: Vec<Rect> = if ctx.layout.should_stack_cards() {
        Layout::vertical([Constraint::Ratio(1, 3); 3])
            .split(area)
            .to_vec()
    } else {
        if ctx.direction().is_rtl() {
            features.reverse();
        }
        Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .split(area)
            .to_vec()
    };

    for (id, card_area) in features.iter().zip(areas.iter()) {
        render_card(frame, *card_area, ctx, id);
    }
}

/// Render a single feature card.
fn render_card(frame: &mut Frame, area: Rect, ctx: &RenderContext, id: &str) {
    if area.height < 3 || area.width < 8 {
        return;
    }

    // Block titles do not wrap, so cap the title to the card width
    let title_budget = area.width.saturating_sub(4) as usize;
    let title = truncate_to_width(&ctx.t(&feature_key(id, "title")), title_budget);

    let block = Block::bordered()
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            title,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(ctx.text_alignment());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let mut lines = vec![Line::styled(
        ctx.t(&feature_key(id, "description")),
        Style::default().fg(COLOR_DIM),
    )];
    if inner.height >= 3 {
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(
        format!("[ {} ]", ctx.t(&feature_key(id, "button"))),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(lines)
        .alignment(ctx.text_alignment())
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_key() {
        assert_eq!(feature_key("upload", "title"), "features.upload.title");
        assert_eq!(feature_key("chat", "button"), "features.chat.button");
    }

    #[test]
    fn test_feature_ids_cover_catalog() {
        use crate::i18n::{catalog_for, Language};
        let catalog = catalog_for(Language::En);
        for id in FEATURES {
            for field in ["title", "description", "button"] {
                assert!(
                    catalog.get(&feature_key(id, field)).is_some(),
                    "missing features.{}.{}",
                    id,
                    field
                );
            }
        }
    }
}
