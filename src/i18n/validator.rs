//! Translation quality checks for page content.
//!
//! A translated page must keep the original's shape (same keys, same value
//! kinds, same list lengths) and leave contact details such as email
//! addresses and URLs untouched. Nothing here rejects a translation; the
//! report is logged so drift in the model's output is visible.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Findings from comparing a translation against its original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// The translation is structurally a different document
    pub errors: Vec<String>,

    /// Local drift (a renamed key, a dropped list entry, an altered URL)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

pub struct TranslationValidator;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    pub fn validate(original: &Value, translated: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();

        if kind(original) != kind(translated) {
            report.errors.push(format!(
                "Top-level kind changed: original is {}, translation is {}",
                kind(original),
                kind(translated)
            ));
            return report;
        }

        Self::compare("$", original, translated, &mut report);

        let mut orig_text = Vec::new();
        let mut trans_text = Vec::new();
        collect_strings(original, &mut orig_text);
        collect_strings(translated, &mut trans_text);
        let orig_text = orig_text.join("\n");
        let trans_text = trans_text.join("\n");

        let orig_emails = Self::extract_emails(&orig_text);
        let trans_emails = Self::extract_emails(&trans_text);
        if orig_emails != trans_emails {
            report.warnings.push(format!(
                "Email mismatch: original has {:?}, translation has {:?}",
                orig_emails, trans_emails
            ));
        }

        let orig_urls = Self::extract_urls(&orig_text);
        let trans_urls = Self::extract_urls(&trans_text);
        if orig_urls != trans_urls {
            report.warnings.push(format!(
                "URL mismatch: original has {} URLs, translation has {} URLs",
                orig_urls.len(),
                trans_urls.len()
            ));
        }

        report
    }

    fn compare(at: &str, original: &Value, translated: &Value, report: &mut ValidationReport) {
        match (original, translated) {
            (Value::Object(orig), Value::Object(trans)) => {
                for (key, orig_value) in orig {
                    let path = format!("{at}.{key}");
                    match trans.get(key) {
                        Some(trans_value) => Self::compare(&path, orig_value, trans_value, report),
                        None => report.warnings.push(format!("Missing key {path}")),
                    }
                }
                for key in trans.keys().filter(|k| !orig.contains_key(*k)) {
                    report.warnings.push(format!("Unexpected key {at}.{key}"));
                }
            }
            (Value::Array(orig), Value::Array(trans)) => {
                if orig.len() != trans.len() {
                    report.warnings.push(format!(
                        "Length mismatch at {at}: original has {}, translation has {}",
                        orig.len(),
                        trans.len()
                    ));
                }
                for (i, (o, t)) in orig.iter().zip(trans).enumerate() {
                    Self::compare(&format!("{at}[{i}]"), o, t, report);
                }
            }
            (o, t) if kind(o) != kind(t) => {
                report.warnings.push(format!(
                    "Kind mismatch at {at}: original is {}, translation is {}",
                    kind(o),
                    kind(t)
                ));
            }
            _ => {}
        }
    }

    fn extract_emails(text: &str) -> Vec<String> {
        let regex = EMAIL_REGEX
            .get_or_init(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn collect_strings<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::String(s) => out.push(s),
        Value::Array(items) => items.iter().for_each(|v| collect_strings(v, out)),
        Value::Object(map) => map.values().for_each(|v| collect_strings(v, out)),
        _ => {}
    }
}
