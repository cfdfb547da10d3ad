//! Language registry: every language the site content can be shown in.
//!
//! Initialized once on first access via `OnceLock` and immutable afterwards.

use serde::Serialize;
use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    /// ISO 639-1 code (`zh` for Mandarin Chinese)
    pub code: &'static str,

    /// English name, also the name sent to the completion endpoint
    pub name: &'static str,

    /// Short label for the language picker
    pub label: &'static str,

    pub native_name: &'static str,

    /// The language the site copy is authored in (exactly one)
    pub is_canonical: bool,
}

pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }

    /// Look up by English name or picker label, ignoring case.
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        let name = name.trim();
        self.languages.iter().find(|lang| {
            lang.name.eq_ignore_ascii_case(name) || lang.label.eq_ignore_ascii_case(name)
        })
    }

    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Languages content can be translated into (everything but the canonical one).
    pub fn list_targets(&self) -> Vec<&LanguageConfig> {
        self.languages
            .iter()
            .filter(|lang| !lang.is_canonical)
            .collect()
    }

    /// # Panics
    /// Panics unless exactly one canonical language is registered.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            label: "English",
            native_name: "English",
            is_canonical: true,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            label: "Hindi",
            native_name: "हिन्दी",
            is_canonical: false,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            label: "Spanish",
            native_name: "Español",
            is_canonical: false,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            label: "French",
            native_name: "Français",
            is_canonical: false,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            label: "German",
            native_name: "Deutsch",
            is_canonical: false,
        },
        LanguageConfig {
            code: "zh",
            name: "Mandarin Chinese",
            label: "Chinese",
            native_name: "中文",
            is_canonical: false,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            label: "Arabic",
            native_name: "العربية",
            is_canonical: false,
        },
    ]
}
