//! Anthropic Messages API client implementation

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use geoassist_core::{ChatModel, ChatTurn, Error, Result, TokenStream};

use crate::config::AnthropicConfig;
use crate::sse::{SseEvent, SseParser};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Total wall-clock ceiling for one generation, connect included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Anthropic Messages API client
pub struct AnthropicClient {
    config: AnthropicConfig,
    client: Client,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    stream: bool,
    system: &'a str,
    messages: &'a [ChatTurn],
}

impl AnthropicClient {
    /// Model constants
    pub const CLAUDE_SONNET: &'static str = "claude-sonnet-4-6";

    /// Create a new client from configuration
    pub fn new(config: AnthropicConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = AnthropicConfig::from_env()?;
        Self::new(config)
    }
}

#[async_trait]
impl ChatModel for AnthropicClient {
    async fn stream_chat(&self, system: &str, turns: &[ChatTurn]) -> Result<TokenStream> {
        let request_body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            stream: true,
            system,
            messages: turns,
        };

        let url = format!("{}/v1/messages", self.config.api_url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Upstream(format!(
                "Messages API request failed with status {}: {}",
                status, error_text
            )));
        }

        let (tx, rx) = mpsc::channel::<Result<String>>(32);

        tokio::spawn(async move {
            let mut body = response.bytes_stream();
            let mut parser = SseParser::new();

            while let Some(chunk) = body.next().await {
                let chunk = match chunk {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        let _ = tx.send(Err(Error::Network(e.to_string()))).await;
                        return;
                    }
                };

                let events = match parser.push(&chunk) {
                    Ok(events) => events,
                    Err(e) => {
                        let _ = tx.send(Err(e)).await;
                        return;
                    }
                };

                for event in events {
                    match event {
                        SseEvent::Delta(text) => {
                            // A closed receiver means the caller went away;
                            // stop reading and drop the upstream connection.
                            if tx.send(Ok(text)).await.is_err() {
                                tracing::debug!("caller disconnected, releasing upstream stream");
                                return;
                            }
                        }
                        SseEvent::Stop => return,
                    }
                }
            }
        });

        Ok(Box::pin(ReceiverStream::new(rx)))
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}
