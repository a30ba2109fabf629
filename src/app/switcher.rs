//! Language switcher selection state.

use crate::i18n::Language;

/// Keyboard selection state for the language switcher.
///
/// Tracks which entry is highlighted; the *active* language lives on the
/// localizer. Highlight and activation are separate so the user can move
/// across entries without changing the language until they confirm.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitcherState {
    highlighted: usize,
}

impl SwitcherState {
    /// Create a switcher state with the given language highlighted.
    pub fn new(language: Language) -> Self {
        let mut state = Self::default();
        state.highlight_language(language);
        state
    }

    /// Index of the highlighted entry in [`Language::all`] order.
    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    /// The highlighted language.
    pub fn highlighted_language(&self) -> Language {
        Language::all()[self.highlighted]
    }

    /// Move the highlight to the next entry, wrapping around.
    pub fn next(&mut self) {
        self.highlighted = (self.highlighted + 1) % Language::all().len();
    }

    /// Move the highlight to the previous entry, wrapping around.
    pub fn prev(&mut self) {
        let len = Language::all().len();
        self.highlighted = (self.highlighted + len - 1) % len;
    }

    /// Move the highlight onto a specific language.
    pub fn highlight_language(&mut self, language: Language) {
        if let Some(idx) = Language::all().iter().position(|&l| l == language) {
            self.highlighted = idx;
        }
    }
}
