//! Translation catalogs loaded from embedded JSON resources.
//!
//! Catalogs are nested JSON objects (one file per language under
//! `locales/`) flattened into dot-separated keys at load time, so a lookup
//! for `"features.chat.title"` resolves against the `features.chat` object
//! of the source file.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use super::Language;

/// English catalog, embedded at compile time.
static EN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json_str(include_str!("../../locales/en.json"))
        .expect("embedded locales/en.json is valid JSON")
});

/// Hebrew catalog, embedded at compile time.
static HE_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json_str(include_str!("../../locales/he.json"))
        .expect("embedded locales/he.json is valid JSON")
});

/// A flat key-to-text translation table for one language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parse a catalog from a nested JSON document.
    ///
    /// Non-string leaves are skipped; only string values become entries.
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        let root: Value = serde_json::from_str(source)?;
        let mut entries = HashMap::new();
        flatten_into("", &root, &mut entries);
        Ok(Self { entries })
    }

    /// Look up a translation by its flattened key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Get the embedded catalog for a language.
pub fn catalog_for(language: Language) -> &'static Catalog {
    match language {
        Language::En => &EN_CATALOG,
        Language::He => &HE_CATALOG,
    }
}

/// The fallback catalog used when a key is missing from the active one.
pub fn fallback_catalog() -> &'static Catalog {
    &EN_CATALOG
}

fn flatten_into(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                flatten_into(&key, child, out);
            }
        }
        Value::String(text) => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), text.clone());
            }
        }
        _ => {}
    }
}
