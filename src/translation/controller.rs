use serde_json::Value;
use tracing::{error, info};

use super::{translate_page_content, Translator};
use crate::content::{ContentRegistry, PageId};
use crate::i18n::Language;
use crate::notify::Toast;

pub const TOAST_TITLE: &str = "Translation Error";
pub const TOAST_DESCRIPTION: &str =
    "Could not translate the page content. Please try again or select a different language.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationState {
    Original,
    Loading,
    Translated,
}

/// Shows one page either as authored or translated.
///
/// Visible content only ever switches to a translation that parsed as
/// JSON; every failure leaves the original on screen and raises exactly
/// one toast. Calls take `&mut self`, so one controller never has two
/// translations in flight.
pub struct TranslationController<T: Translator> {
    translator: T,
    original: Value,
    translated: Option<Value>,
    state: TranslationState,
    toasts: Vec<Toast>,
}

impl<T: Translator> TranslationController<T> {
    pub fn new(translator: T, content: Value) -> Self {
        Self {
            translator,
            original: content,
            translated: None,
            state: TranslationState::Original,
            toasts: Vec::new(),
        }
    }

    pub fn for_page(translator: T, page: PageId) -> Self {
        Self::new(translator, ContentRegistry::get().page(page).clone())
    }

    pub fn state(&self) -> TranslationState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == TranslationState::Loading
    }

    pub fn is_translated(&self) -> bool {
        self.state == TranslationState::Translated
    }

    pub fn original(&self) -> &Value {
        &self.original
    }

    /// What the page should display right now.
    pub fn content(&self) -> &Value {
        match (&self.state, &self.translated) {
            (TranslationState::Translated, Some(translated)) => translated,
            _ => &self.original,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// Translate the original content. Returns whether the translation is
    /// now showing.
    pub async fn translate(&mut self, target_language: &str) -> bool {
        let language = match Language::resolve(target_language) {
            Ok(language) => language,
            Err(e) => {
                error!("Translation failed: {:#}", e);
                self.fail();
                return false;
            }
        };

        self.state = TranslationState::Loading;
        match translate_page_content(&self.translator, &self.original, language).await {
            Ok(translated) => {
                info!(language = language.code(), "Showing translated content");
                self.translated = Some(translated);
                self.state = TranslationState::Translated;
                true
            }
            Err(e) => {
                error!(language = language.code(), "Translation failed: {:#}", e);
                self.fail();
                false
            }
        }
    }

    fn fail(&mut self) {
        self.translated = None;
        self.state = TranslationState::Original;
        self.toasts.push(Toast::error(TOAST_TITLE, TOAST_DESCRIPTION));
    }

    /// Show the original again.
    pub fn reset(&mut self) {
        self.translated = None;
        self.state = TranslationState::Original;
    }

    /// Switch to another page's content, dropping any translation.
    pub fn set_page(&mut self, content: Value) {
        self.original = content;
        self.reset();
    }
}
