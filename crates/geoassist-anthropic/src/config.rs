//! Anthropic client configuration

use geoassist_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the Anthropic Messages API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl AnthropicConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("ANTHROPIC_API_KEY").map_err(|_| {
            Error::Configuration("ANTHROPIC_API_KEY environment variable not found".to_string())
        })?;

        let api_url = env::var("ANTHROPIC_API_URL")
            .unwrap_or_else(|_| "https://api.anthropic.com".to_string());

        let model =
            env::var("GEOASSIST_MODEL").unwrap_or_else(|_| "claude-sonnet-4-6".to_string());

        let max_tokens = env::var("GEOASSIST_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1024);

        Ok(Self {
            api_key,
            api_url,
            model,
            max_tokens,
        })
    }

    /// Create configuration with explicit values
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: "https://api.anthropic.com".to_string(),
            model: "claude-sonnet-4-6".to_string(),
            max_tokens: 1024,
        }
    }
}
