//! Page content registry: single source of truth for all page copy.
//!
//! Page copy is bundled JSON, parsed once on first access and shared for the
//! process lifetime. The API, the chatbot context and the translation
//! controller all read from here, so there is exactly one copy of each page.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

/// Identifies a content page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Home,
    About,
    Projects,
    News,
    HowToHelp,
    Contact,
}

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::Home,
        PageId::About,
        PageId::Projects,
        PageId::News,
        PageId::HowToHelp,
        PageId::Contact,
    ];

    /// URL slug (`how-to-help`, ...).
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Projects => "projects",
            PageId::News => "news",
            PageId::HowToHelp => "how-to-help",
            PageId::Contact => "contact",
        }
    }

    /// Site path the page is served at.
    pub fn path(self) -> &'static str {
        match self {
            PageId::Home => "/",
            PageId::About => "/about",
            PageId::Projects => "/projects",
            PageId::News => "/news",
            PageId::HowToHelp => "/how-to-help",
            PageId::Contact => "/contact",
        }
    }

    pub fn from_slug(slug: &str) -> Result<PageId> {
        match Self::ALL.into_iter().find(|p| p.slug() == slug) {
            Some(page) => Ok(page),
            None => bail!("Unknown page: '{}'", slug),
        }
    }

    /// Resolve a site path (as the browser reports it) to a page.
    pub fn from_path(path: &str) -> Option<PageId> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|p| p.path() == normalized)
    }

    fn source(self) -> &'static str {
        match self {
            PageId::Home => include_str!("pages/home.json"),
            PageId::About => include_str!("pages/about.json"),
            PageId::Projects => include_str!("pages/projects.json"),
            PageId::News => include_str!("pages/news.json"),
            PageId::HowToHelp => include_str!("pages/how_to_help.json"),
            PageId::Contact => include_str!("pages/contact.json"),
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

pub struct ContentRegistry {
    pages: Vec<(PageId, Value)>,
}

static REGISTRY: OnceLock<ContentRegistry> = OnceLock::new();

impl ContentRegistry {
    /// Get the global content registry instance.
    pub fn get() -> &'static ContentRegistry {
        REGISTRY.get_or_init(|| ContentRegistry {
            pages: PageId::ALL
                .into_iter()
                .map(|page| {
                    // Bundled at compile time; covered by test_all_pages_parse
                    let content = serde_json::from_str(page.source())
                        .unwrap_or_else(|e| panic!("Bundled content for {page} is invalid: {e}"));
                    (page, content)
                })
                .collect(),
        })
    }

    pub fn page(&self, page: PageId) -> &Value {
        self.pages
            .iter()
            .find(|(id, _)| *id == page)
            .map(|(_, content)| content)
            .expect("Every PageId is registered")
    }

    pub fn pages(&self) -> impl Iterator<Item = (PageId, &Value)> {
        self.pages.iter().map(|(id, content)| (*id, content))
    }

    /// The about page's team list, used as the default roster.
    pub fn default_team(&self) -> Vec<Value> {
        self.page(PageId::About)["team"]["members"]
            .as_array()
            .cloned()
            .unwrap_or_default()
    }
}
