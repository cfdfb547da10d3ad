//! Translation targets and translation quality checks.
//!
//! - `registry`: the languages the site can be translated into
//! - `language`: validated `Language` handle backed by the registry
//! - `validator`: structural comparison of translated page content
//!
//! ```rust,ignore
//! use sarthi_site::i18n::{Language, LanguageRegistry};
//!
//! let hindi = Language::resolve("Hindi")?;
//! assert_eq!(hindi.code(), "hi");
//!
//! let targets = LanguageRegistry::get().list_targets();
//! ```

mod language;
mod registry;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{TranslationValidator, ValidationReport};
