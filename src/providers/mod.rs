use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::core::ProviderConfig;

mod factory;
mod xai;
mod zai;
pub use factory::{create_provider, supported_providers};
pub use xai::XaiProvider;
pub use zai::ZaiProvider;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// One prior description/HTML exchange, replayed as conversational
/// context for follow-up generations.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversationTurn {
    pub description: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} API key is not configured")]
    MissingApiKey { provider: &'static str },
    #[error("{provider} API error: {status} - {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },
    #[error("No content returned from {provider} API")]
    NoContent { provider: &'static str },
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Unknown provider type: {requested}. Supported types: {supported}")]
    Unsupported { requested: String, supported: String },
}

/// A backend that turns a natural-language description into an HTML
/// mockup via an external model API.
#[async_trait]
pub trait MockupProvider: Send + Sync + std::fmt::Debug {
    async fn generate_mockup(
        &self,
        description: &str,
        history: &[ConversationTurn],
    ) -> Result<String, ProviderError>;

    /// Stable identifier used for provenance and logging
    fn name(&self) -> &'static str;
}

/// Builds the ordered chat message list: one system message, a
/// user/assistant pair per prior turn, then the current request.
/// Order is significant, it defines the model's conversational
/// context.
pub fn build_messages(
    system_prompt: &str,
    history: &[ConversationTurn],
    current_description: &str,
) -> Vec<Message> {
    let mut messages = vec![Message::new(Role::System, system_prompt)];

    for turn in history {
        messages.push(Message::new(Role::User, &turn.description));
        messages.push(Message::new(Role::Assistant, &turn.html));
    }

    messages.push(Message::new(Role::User, current_description));

    messages
}

static HTML_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```html\n?(.*?)```").unwrap());
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```\n?(.*?)```").unwrap());

/// Best-effort unwrap of the markdown code fences some models wrap
/// their output in. Not a validator; text without a well-formed fence
/// falls through trimmed but otherwise unchanged.
pub fn extract_html(content: &str) -> String {
    if let Some(captures) = HTML_FENCE.captures(content) {
        return captures[1].trim().to_string();
    }

    if let Some(captures) = CODE_FENCE.captures(content) {
        return captures[1].trim().to_string();
    }

    content.trim().to_string()
}

/// Issues a single non-streaming chat completion request and returns
/// the first choice's message content. One attempt, no retries, any
/// failure propagates immediately.
pub(crate) async fn chat_completion(
    provider: &'static str,
    config: &ProviderConfig,
    messages: &[Message],
    temperature: f64,
    max_tokens: u32,
) -> Result<String, ProviderError> {
    let payload = json!({
        "model": config.model,
        "messages": messages,
        "temperature": temperature,
        "max_tokens": max_tokens,
    });

    let response = reqwest::Client::new()
        .post(&config.api_url)
        .bearer_auth(&config.api_key)
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await
        .map_err(|source| ProviderError::Transport { provider, source })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Api {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    let body: Value = response
        .json()
        .await
        .map_err(|source| ProviderError::Transport { provider, source })?;

    body["choices"][0]["message"]["content"]
        .as_str()
        .map(|content| content.to_string())
        .ok_or(ProviderError::NoContent { provider })
}
