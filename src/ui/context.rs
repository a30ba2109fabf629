//! Render context passed to every UI component.

use ratatui::layout::Alignment;

use super::layout::LayoutContext;
use crate::app::{App, SwitcherState};
use crate::domain::ConnectionState;
use crate::i18n::{Localizer, TextDirection};

/// Everything a render function needs, borrowed from [`App`] for one
/// frame.
///
/// Carrying the localizer here (rather than reaching for a global) keeps
/// translation and direction decisions explicit at every call site.
pub struct RenderContext<'a> {
    /// Localization context for text lookups and direction
    pub localizer: &'a Localizer,
    /// Backend connection status
    pub connection: &'a ConnectionState,
    /// Language switcher selection state
    pub switcher: &'a SwitcherState,
    /// Current spinner frame for the checking animation
    pub spinner_frame: usize,
    /// Terminal dimensions
    pub layout: LayoutContext,
}

impl<'a> RenderContext<'a> {
    /// Build a render context for the current frame.
    pub fn from_app(app: &'a App, layout: LayoutContext) -> Self {
        Self {
            localizer: &app.localizer,
            connection: &app.connection,
            switcher: &app.switcher,
            spinner_frame: app.spinner_frame,
            layout,
        }
    }

    /// Translate a catalog key.
    pub fn t(&self, key: &str) -> String {
        self.localizer.t(key)
    }

    /// Writing direction of the active language.
    pub fn direction(&self) -> TextDirection {
        self.localizer.direction()
    }

    /// Alignment of body text: the line start for the active direction.
    pub fn text_alignment(&self) -> Alignment {
        match self.direction() {
            TextDirection::Ltr => Alignment::Left,
            TextDirection::Rtl => Alignment::Right,
        }
    }

    /// Alignment of the line end for the active direction.
    pub fn end_alignment(&self) -> Alignment {
        match self.direction() {
            TextDirection::Ltr => Alignment::Right,
            TextDirection::Rtl => Alignment::Left,
        }
    }
}
