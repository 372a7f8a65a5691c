//! Player locale

use serde::{Deserialize, Serialize};

/// Fallback when neither the page nor the browser names a language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Explicit locale override with browser fallbacks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    explicit: Option<String>,
}

impl Locale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a locale; stored upper-cased
    pub fn set(&mut self, locale: &str) {
        self.explicit = Some(locale.to_uppercase());
    }

    /// Two-letter upper-case language code.
    ///
    /// Tries the explicit locale, then the document language, then the
    /// navigator language, then [`DEFAULT_LANGUAGE`]. Empty values are skipped.
    pub fn resolve(&self, document_language: Option<&str>, navigator_language: Option<&str>) -> String {
        let chosen = [self.explicit.as_deref(), document_language, navigator_language]
            .into_iter()
            .flatten()
            .find(|lang| !lang.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE);

        chosen.chars().take(2).collect::<String>().to_uppercase()
    }
}
