use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables (and `.env`
/// when present). Every key has a default; API keys stay optional until a
/// provider is actually selected.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub default_provider: String,
    pub openai_model: String,
    pub anthropic_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub resume_path: PathBuf,
    pub output_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            default_provider: env_or("DEFAULT_PROVIDER", "openai"),
            openai_model: env_or("OPENAI_MODEL", "gpt-4"),
            anthropic_model: env_or("ANTHROPIC_MODEL", "claude-3-sonnet-20240229"),
            max_tokens: env_or("MAX_TOKENS", "4000")
                .parse::<u32>()
                .context("MAX_TOKENS must be a positive integer")?,
            temperature: env_or("TEMPERATURE", "0.7")
                .parse::<f32>()
                .context("TEMPERATURE must be a number")?,
            resume_path: PathBuf::from(env_or("RESUME_PATH", "resume.pdf")),
            output_dir: PathBuf::from(env_or("OUTPUT_DIR", "output")),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
