//! Site chatbot: answers questions from the content of the page being viewed.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::completion::CompletionClient;
use crate::content::{ContentRegistry, PageId};

pub const GREETING: &str =
    "Hello! I'm the Sarthi Shiksha assistant. How can I help you today?";

pub const FALLBACK_ANSWER: &str = "I'm sorry, I don't have that information. You may find more details on the relevant page or by contacting the NGO directly.";

pub const APOLOGY: &str = "Sorry, I'm having trouble connecting right now. Please try again later.";

#[derive(Debug, Clone, Deserialize)]
pub struct ChatQuery {
    pub query: String,
    /// Page slug or site path the visitor is on.
    #[serde(default)]
    pub page: Option<String>,
    /// Caller-supplied page JSON; takes precedence over `page`.
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub response: String,
}

/// Resolve the page the question is about. Unknown pages fall back to home.
pub fn resolve_page(page: Option<&str>) -> PageId {
    page.and_then(|p| PageId::from_slug(p).ok().or_else(|| PageId::from_path(p)))
        .unwrap_or(PageId::Home)
}

impl ChatQuery {
    /// The JSON context the answer must be grounded in.
    pub fn context(&self) -> String {
        match self.context.as_deref().filter(|c| !c.trim().is_empty()) {
            Some(context) => context.to_string(),
            None => {
                let page = resolve_page(self.page.as_deref());
                let content = ContentRegistry::get().page(page);
                serde_json::to_string_pretty(content).unwrap_or_else(|_| content.to_string())
            }
        }
    }
}

fn build_chat_system_prompt(context: &str) -> String {
    format!(
        r#"You are a friendly and helpful chatbot for an NGO called "Sarthi Shiksha Roshan Seva Samiti".

Your goal is to answer the user's questions based on the information provided about the NGO from the current webpage content.
Be concise and helpful. If the information is not available in the provided context, say "{FALLBACK_ANSWER}"

Do not make up information.

Webpage Content (Context):
```json
{context}
```"#
    )
}

fn build_chat_user_prompt(query: &str) -> String {
    format!("User's Question:\n\"{}\"", query)
}

/// Answer a visitor question. Endpoint failures become the canned apology.
pub async fn chat_with_website(client: &CompletionClient, query: &ChatQuery) -> ChatReply {
    let system_prompt = build_chat_system_prompt(&query.context());

    match client
        .complete(&system_prompt, &build_chat_user_prompt(query.query.trim()))
        .await
    {
        Ok(answer) => {
            info!(answer_len = answer.len(), "Chat answered");
            ChatReply {
                response: answer.trim().to_string(),
            }
        }
        Err(e) => {
            error!("Chat completion failed: {:#}", e);
            ChatReply {
                response: APOLOGY.to_string(),
            }
        }
    }
}
