//! Translate one site page and print the result, the same way the language
//! switcher on the site does.
//!
//! Usage:
//!   cargo run --bin translate-page -- <page> <language> [--save]
//!   cargo run --bin translate-page -- about Hindi
//!   cargo run --bin translate-page -- --list
//!
//! Required environment variables:
//! - OPENAI_API_KEY
//!
//! Optional:
//! - OPENAI_MODEL (defaults to gpt-4o-mini)
//! - OPENAI_API_URL
//!
//! With `--save` the translated page is written to run-history/.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use sarthi_site::completion::CompletionClient;
use sarthi_site::config::Config;
use sarthi_site::content::PageId;
use sarthi_site::i18n::LanguageRegistry;
use sarthi_site::translation::TranslationController;
use std::fs;
use std::path::Path;
use tracing::info;

fn print_usage() {
    println!("Usage: translate-page <page> <language> [--save]");
    println!();
    println!("Pages:");
    for page in PageId::ALL {
        println!("  {:<12} {}", page.slug(), page.path());
    }
    println!();
    println!("Languages:");
    for language in LanguageRegistry::get().list_targets() {
        println!("  {:<18} ({})", language.name, language.code);
    }
}

fn save_translation(page: PageId, code: &str, content: &serde_json::Value) -> Result<String> {
    let history_dir = Path::new("run-history");
    fs::create_dir_all(history_dir).context("Failed to create run-history directory")?;

    let filename = format!(
        "{}-{}-{}.json",
        page.slug(),
        code,
        Utc::now().format("%Y-%m-%d_%H-%M-%S")
    );
    let filepath = history_dir.join(filename);
    fs::write(&filepath, serde_json::to_string_pretty(content)?)
        .context("Failed to write translation to run-history")?;
    Ok(filepath.display().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sarthi_site=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--list" || a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let save = args.iter().any(|a| a == "--save");
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();
    let [page, language] = positional.as_slice() else {
        print_usage();
        bail!("Expected a page and a language");
    };

    let page = PageId::from_slug(page)?;
    let config = Config::from_env()?;
    let client = CompletionClient::new(&config);
    info!(page = %page, language = %language, model = client.model(), "Translating page");

    let mut controller = TranslationController::for_page(client, page);
    if !controller.translate(language).await {
        for toast in controller.take_toasts() {
            eprintln!("{}: {}", toast.title, toast.description);
        }
        bail!("Translation of '{}' failed", page);
    }

    println!("{}", serde_json::to_string_pretty(controller.content())?);

    if save {
        let code = sarthi_site::i18n::Language::resolve(language)?.code();
        let path = save_translation(page, code, controller.content())?;
        println!();
        println!("💾 Saved to: {}", path);
    }

    Ok(())
}
