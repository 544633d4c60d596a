//! Anthropic Messages API integration for GeoAssist
//!
//! This crate provides the Anthropic implementation of the `ChatModel` trait,
//! consuming the Messages API event stream incrementally.

mod client;
mod config;
mod sse;


pub use client::AnthropicClient;
pub use config::AnthropicConfig;
pub use sse::{SseEvent, SseParser};

// Re-export core types for convenience
pub use geoassist_core::{ChatModel, ChatTurn, Error, Result, TokenStream};
