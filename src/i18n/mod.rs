//! Localization: supported languages, text direction, and the [`Localizer`]
//! context object.
//!
//! The localizer is plain state owned by the application and passed by
//! reference into every render call. There is deliberately no process-wide
//! translation singleton; components read text through the context they are
//! handed.

mod catalog;

pub use catalog::{catalog_for, fallback_catalog, Catalog};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (left-to-right).
    #[default]
    En,
    /// Hebrew (right-to-left).
    He,
}

impl Language {
    /// The BCP 47 style locale code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    /// Parse a locale code, tolerating region suffixes like `en-US`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Language::En),
            "he" | "he-il" | "iw" => Some(Language::He),
            _ => None,
        }
    }

    /// The catalog key under which this language's display name lives.
    pub fn label_key(self) -> &'static str {
        match self {
            Language::En => "language.en",
            Language::He => "language.he",
        }
    }

    /// Writing direction of the language. Pure and total: `Rtl` for
    /// Hebrew, `Ltr` for everything else.
    pub fn direction(self) -> TextDirection {
        match self {
            Language::He => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// All supported languages, in switcher display order.
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::He]
    }
}

/// Horizontal writing direction, derived from the active language.
///
/// This is a derived value consumed by the rendering layer; nothing stores
/// it, so it can never disagree with the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    /// Left-to-right layout.
    #[default]
    Ltr,
    /// Right-to-left layout.
    Rtl,
}

impl TextDirection {
    /// Whether this is a right-to-left direction.
    pub fn is_rtl(self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

/// Localization context: the active language plus catalog lookup.
///
/// Owned by [`crate::app::App`] and passed by reference to render
/// functions. Setting the same language twice is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    /// Create a localizer with the given startup language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The currently active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Writing direction of the active language.
    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    /// Activate a language. Idempotent; returns whether the active
    /// language actually changed.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.language == language {
            return false;
        }
        self.language = language;
        true
    }

    /// Translate a key against the active catalog.
    ///
    /// Falls back to the English catalog, then to the key itself, so a
    /// missing entry renders as its key rather than as nothing.
    pub fn t(&self, key: &str) -> String {
        catalog_for(self.language)
            .get(key)
            .or_else(|| fallback_catalog().get(key))
            .unwrap_or(key)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for &lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_from_code_tolerates_regions_and_case() {
        assert_eq!(Language::from_code("EN-us"), Some(Language::En));
        assert_eq!(Language::from_code("he-IL"), Some(Language::He));
        assert_eq!(Language::from_code("iw"), Some(Language::He));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_direction_is_rtl_only_for_hebrew() {
        assert_eq!(Language::En.direction(), TextDirection::Ltr);
        assert_eq!(Language::He.direction(), TextDirection::Rtl);
        assert!(Language::He.direction().is_rtl());
        assert!(!Language::En.direction().is_rtl());
    }

    #[test]
    fn test_localizer_defaults_to_english() {
        let localizer = Localizer::default();
        assert_eq!(localizer.language(), Language::En);
        assert_eq!(localizer.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_set_language_is_idempotent() {
        let mut localizer = Localizer::new(Language::En);
        assert!(localizer.set_language(Language::He));
        assert!(!localizer.set_language(Language::He));
        assert_eq!(localizer.language(), Language::He);
    }

    #[test]
    fn test_direction_follows_language_changes() {
        let mut localizer = Localizer::new(Language::En);
        localizer.set_language(Language::He);
        assert_eq!(localizer.direction(), TextDirection::Rtl);
        localizer.set_language(Language::En);
        assert_eq!(localizer.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_translation_uses_active_catalog() {
        let mut localizer = Localizer::new(Language::En);
        assert_eq!(localizer.t("status.connected"), "Connected");
        localizer.set_language(Language::He);
        assert_eq!(localizer.t("status.connected"), "מחובר");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let localizer = Localizer::new(Language::He);
        assert_eq!(localizer.t("no.such.key"), "no.such.key");
    }
}
