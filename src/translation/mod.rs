//! Page content translation through the completion endpoint.
//!
//! Content travels as pretty-printed JSON and must come back as JSON with
//! the same keys. Models often wrap the answer in a ```json fence, which is
//! stripped before parsing.

mod controller;

pub use controller::{TranslationController, TranslationState};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::completion::CompletionClient;
use crate::i18n::{Language, TranslationValidator};

/// Translation wants fidelity over creativity.
const TRANSLATION_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// Anything that can translate a block of text.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate_text(&self, text: &str, target: Language) -> Result<String>;
}

fn build_translation_system_prompt(target_language: &str) -> String {
    format!(
        r#"You are a professional translator for a non-profit organization's website. Translate the website content you are given from English to {}.

## Rules
- The input is a JSON document. Return a JSON document with exactly the same structure and keys.
- Translate only string values. Never translate keys.
- Do not translate email addresses, URLs, phone numbers or icon names.
- Keep the organization's name "Sarthi Shiksha Roshan Seva Samiti" as written.
- Keep numbers, currency amounts and statistics as written.
- Return only the JSON document, with no explanation."#,
        target_language
    )
}

fn build_translation_user_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Please translate the following website content to {}:\n\n{}",
        target_language, text
    )
}

#[async_trait]
impl Translator for CompletionClient {
    async fn translate_text(&self, text: &str, target: Language) -> Result<String> {
        // Content is authored in the canonical language already
        if target.is_canonical() {
            return Ok(text.to_string());
        }

        let translated = self
            .complete_with_temperature(
                &build_translation_system_prompt(target.name()),
                &build_translation_user_prompt(text, target.name()),
                TRANSLATION_TEMPERATURE,
            )
            .await
            .with_context(|| format!("Translation to {} failed", target.name()))?;

        info!(
            language = target.code(),
            input_len = text.len(),
            output_len = translated.len(),
            "Translation completed"
        );
        Ok(translated)
    }
}

/// `POST /api/translate`: translate free text into a supported language.
pub async fn translate_website_content(
    translator: &dyn Translator,
    request: &TranslateRequest,
) -> Result<TranslateResponse> {
    let language = Language::resolve(&request.target_language)?;
    let translated_text = translator.translate_text(&request.text, language).await?;
    Ok(TranslateResponse { translated_text })
}

/// Remove a surrounding markdown code fence (```json ... ``` or ``` ... ```).
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest
        .strip_prefix("json")
        .or_else(|| rest.strip_prefix("JSON"))
        .unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parse a model answer back into page content.
pub fn parse_translated_content(raw: &str) -> Result<Value> {
    serde_json::from_str(strip_code_fences(raw)).context("Translated content is not valid JSON")
}

/// Translate a whole page: serialize, translate, parse, then compare shapes.
pub async fn translate_page_content(
    translator: &dyn Translator,
    content: &Value,
    target: Language,
) -> Result<Value> {
    let text = serde_json::to_string_pretty(content).context("Failed to serialize page content")?;
    let raw = translator.translate_text(&text, target).await?;
    let translated = parse_translated_content(&raw)?;

    let validation = TranslationValidator::validate(content, &translated);
    if validation.has_warnings() {
        warn!(
            "Translation validation warnings for {} ({}): {:?}",
            target.name(),
            target.code(),
            validation.warnings
        );
    }
    if validation.has_errors() {
        warn!(
            "Translation validation errors for {} ({}): {:?}",
            target.name(),
            target.code(),
            validation.errors
        );
    }

    Ok(translated)
}
