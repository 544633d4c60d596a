//! Chat model provider trait

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use crate::{ChatTurn, Result};

/// A lazy, finite, one-shot sequence of generated text deltas.
///
/// The stream ends when the upstream provider finishes the answer; an `Err`
/// item means the upstream stream failed mid-generation.
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Trait for streaming chat model providers
///
/// Implementations open a single upstream stream per call and yield text
/// deltas in generation order. Dropping the returned stream releases the
/// upstream connection.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Start a streamed generation with a system instruction and conversation turns.
    async fn stream_chat(&self, system: &str, turns: &[ChatTurn]) -> Result<TokenStream>;

    /// Identifier of the underlying model.
    fn model_id(&self) -> &str;
}
