//! Core traits and types for GeoAssist
//!
//! This crate defines the fundamental types used across the GeoAssist system:
//! the manual document model, chat wire types, the error taxonomy, and the
//! capability-facing `ChatModel` trait that makes the system test-friendly.

pub mod error;
pub mod llm;
pub mod types;

pub use error::{Error, Result};
pub use llm::{ChatModel, TokenStream};
pub use types::{Category, ChatRequest, ChatTurn, Document, Role, StreamEvent};
