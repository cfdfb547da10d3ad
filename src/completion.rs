use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

/// Chat-completions request. Reasoning models take `max_completion_tokens`
/// and `reasoning_effort` and reject `temperature`.
#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

const REASONING_MAX_TOKENS: u32 = 16000;

/// Check if a model is a reasoning model that doesn't support temperature
fn is_reasoning_model(model: &str) -> bool {
    model.starts_with("gpt-5")
        || model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("o4")
}

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionClient {
    pub fn new(config: &Config) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            api_url: config.openai_api_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            temperature: config.openai_temperature,
            max_tokens: config.completion_max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One system + user exchange at the configured temperature.
    pub async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.complete_with_temperature(system_prompt, user_prompt, self.temperature)
            .await
    }

    pub async fn complete_with_temperature(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String> {
        let request = self.build_request(system_prompt, user_prompt, temperature);
        debug!(model = %self.model, prompt_len = user_prompt.len(), "Sending completion request");

        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to completion endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Completion API error ({}): {}", status, body);
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse completion response")?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .context("Completion response contained no choices")
    }

    fn build_request(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> CompletionRequest {
        let is_reasoning = is_reasoning_model(&self.model);
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            max_completion_tokens: if is_reasoning {
                REASONING_MAX_TOKENS.max(self.max_tokens)
            } else {
                self.max_tokens
            },
            temperature: if is_reasoning { None } else { Some(temperature) },
            reasoning_effort: is_reasoning.then(|| "low".to_string()),
        }
    }
}
