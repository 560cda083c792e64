//! LLM client layer: one capability, two provider backends.
//!
//! Every model call in Beacon goes through [`ChatProvider`]. The two
//! implementations translate the shared message shape into each vendor's
//! request/response format and nothing more: one request per call, no
//! retries, no rate limiting.

mod anthropic;
mod openai;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("API key for provider '{0}' is not configured")]
    MissingApiKey(&'static str),

    #[error("Unsupported provider: {0}")]
    UnknownProvider(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One turn of the conversation sent to a provider.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Per-call generation knobs, resolved from config by the caller.
#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// The single capability the rest of the program consumes: messages in,
/// generated text out.
#[async_trait]
pub trait ChatProvider: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate_response(
        &self,
        messages: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Result<String, LlmError>;
}

/// Builds the provider selected by `name`, validating that its API key is
/// configured.
pub fn create_provider(name: &str, config: &Config) -> Result<Box<dyn ChatProvider>, LlmError> {
    match name.to_lowercase().as_str() {
        "openai" => {
            let api_key = config
                .openai_api_key
                .clone()
                .ok_or(LlmError::MissingApiKey("openai"))?;
            Ok(Box::new(OpenAiProvider::new(
                api_key,
                config.openai_model.clone(),
            )))
        }
        "anthropic" => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .ok_or(LlmError::MissingApiKey("anthropic"))?;
            Ok(Box::new(AnthropicProvider::new(
                api_key,
                config.anthropic_model.clone(),
            )))
        }
        other => Err(LlmError::UnknownProvider(other.to_string())),
    }
}

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to build HTTP client")
}

/// Error body shape shared by both vendors: `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Extracts a human-readable message from an error response body, falling
/// back to the raw body when it is not the expected JSON shape.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<ApiErrorBody>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
