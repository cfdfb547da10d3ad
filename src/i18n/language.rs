//! `Language`: a language handle validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code, borrowed from the registry
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const HINDI: Language = Language { code: "hi" };

    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code.trim()) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    pub fn from_name(name: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_name(name) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unsupported language: '{}'", name),
        }
    }

    /// Accept either form a client may send: `"Hindi"` or `"hi"`.
    pub fn resolve(value: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();
        match registry
            .get_by_name(value)
            .or_else(|| registry.get_by_code(value.trim()))
        {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unsupported language: '{}'", value),
        }
    }

    pub fn canonical() -> Language {
        Language {
            code: LanguageRegistry::get().canonical().code,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// # Panics
    /// Only if the handle was built from a code missing from the registry,
    /// which the constructors rule out.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        assert_eq!(Language::ENGLISH.name(), "English");
        assert!(Language::ENGLISH.is_canonical());
        assert_eq!(Language::canonical(), Language::ENGLISH);
    }

    #[test]
    fn test_hindi_constant() {
        assert_eq!(Language::HINDI.name(), "Hindi");
        assert_eq!(Language::HINDI.native_name(), "हिन्दी");
        assert!(!Language::HINDI.is_canonical());
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("es").expect("known").name(), "Spanish");
        let err = Language::from_code("ja").unwrap_err();
        assert!(err.to_string().contains("Unknown"));
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Language::from_name("German").expect("known").code(), "de");
        assert_eq!(Language::from_name("Chinese").expect("known").code(), "zh");
        assert!(Language::from_name("Esperanto").is_err());
    }

    #[test]
    fn test_resolve_accepts_name_or_code() {
        assert_eq!(Language::resolve("Hindi").expect("name"), Language::HINDI);
        assert_eq!(Language::resolve("hi").expect("code"), Language::HINDI);
        assert!(Language::resolve("Elvish").is_err());
    }

    #[test]
    fn test_display_uses_english_name() {
        let zh = Language::from_code("zh").expect("known");
        assert_eq!(zh.to_string(), "Mandarin Chinese");
    }
}
