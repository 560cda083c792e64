//! Anthropic Messages API backend.
//!
//! The Messages API takes the system prompt as a top-level field, so the
//! shared message list is split: the system turn becomes `system`, the rest
//! go through as user messages.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    api_error_message, http_client, ChatMessage, ChatProvider, GenerationOptions, LlmError, Role,
};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<UserMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

impl MessagesResponse {
    /// Text of the first `text` content block, if any.
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text.as_deref())
    }
}

#[derive(Debug)]
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicProvider {
    pub fn new(api_key: String, model: String) -> Self {
        AnthropicProvider {
            client: http_client(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl ChatProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn generate_response(
        &self,
        messages: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Result<String, LlmError> {
        let (system, user_messages) = split_system(messages);

        let request_body = MessagesRequest {
            model: &self.model,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            system,
            messages: user_messages,
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        debug!(model = %self.model, "anthropic call succeeded");

        parsed
            .text()
            .filter(|text| !text.is_empty())
            .map(String::from)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Splits the shared message list into the Messages API shape: the last
/// system turn becomes the top-level system prompt, everything else is sent
/// as a user message.
fn split_system(messages: &[ChatMessage]) -> (&str, Vec<UserMessage<'_>>) {
    let mut system = "";
    let mut user_messages = Vec::new();
    for message in messages {
        match message.role {
            Role::System => system = &message.content,
            Role::User => user_messages.push(UserMessage {
                role: "user",
                content: &message.content,
            }),
        }
    }
    (system, user_messages)
}
