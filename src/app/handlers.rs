//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::i18n::Language;

impl App {
    /// Handle a key press.
    ///
    /// Bindings:
    /// - `q` / `Esc` / `Ctrl+C` quit
    /// - `Tab` / `Right` highlight the next switcher entry
    /// - `BackTab` / `Left` highlight the previous entry
    /// - `Enter` / `Space` activate the highlighted language
    /// - `1` / `2` activate a language directly
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit();
            }
            KeyCode::Tab | KeyCode::Right => {
                self.switcher.next();
                self.mark_dirty();
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.switcher.prev();
                self.mark_dirty();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate_highlighted();
            }
            KeyCode::Char('1') => {
                self.activate_language(Language::En);
            }
            KeyCode::Char('2') => {
                self.activate_language(Language::He);
            }
            _ => {}
        }
    }
}
