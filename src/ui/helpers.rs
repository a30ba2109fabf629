//! Small text helpers shared by UI components.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Truncate a string to a maximum display width, appending an ellipsis
/// when anything was cut.
///
/// Width is measured in terminal columns, so wide characters count as
/// two.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut result = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        result.push(ch);
    }
    result.push('\u{2026}');
    result
}
