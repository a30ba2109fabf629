//! Application configuration.
//!
//! Runtime knobs with environment overrides, built with the builder
//! pattern. The defaults reproduce the stock deployment: backend on
//! `http://localhost:8000`, English UI.

use crate::i18n::Language;

/// Default backend base URL (Docker exposes the backend on localhost:8000).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL.
pub const ENV_BACKEND_URL: &str = "RAGDECK_BACKEND_URL";

/// Environment variable selecting the startup language (`en` or `he`).
pub const ENV_LANG: &str = "RAGDECK_LANG";

/// Configuration for the application.
///
/// # Example
///
/// ```ignore
/// use ragdeck::config::AppConfig;
/// use ragdeck::i18n::Language;
///
/// let config = AppConfig::default()
///     .with_backend_url("http://localhost:9000")
///     .with_language(Language::He);
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL the health probe targets.
    pub backend_url: String,
    /// Language active when the app starts.
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            language: Language::default(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    /// Set the startup language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Build a config from the process environment.
    ///
    /// `RAGDECK_BACKEND_URL` overrides the backend URL; `RAGDECK_LANG`
    /// selects the startup language. Unknown language codes fall back to
    /// the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_BACKEND_URL) {
            if !url.trim().is_empty() {
                config.backend_url = url;
            }
        }

        if let Ok(code) = std::env::var(ENV_LANG) {
            if let Some(language) = Language::from_code(&code) {
                config.language = language;
            } else if !code.trim().is_empty() {
                tracing::warn!(code = %code, "unsupported language code, using default");
            }
        }

        config
    }
}
