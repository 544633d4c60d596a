//! Document and chat wire types

use serde::{Deserialize, Serialize};

/// Category of a manual page.
///
/// `Command` and `Tool` are reference pages; `General` covers prose pages
/// such as tutorials and overviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Command,
    Tool,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Command => "command",
            Category::Tool => "tool",
            Category::General => "general",
        }
    }
}

/// A single manual document. Immutable once loaded into the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub category: Category,
    /// Corpus-relative identifier, e.g. `commands/Circle.adoc`.
    pub path: String,
    /// Plain text with markup stripped and whitespace normalized.
    pub content: String,
}

/// Role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the trailing conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Inbound chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Option<Vec<ChatTurn>>,
}

/// One unit of streamed output delivered to the caller, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A fragment of generated answer text.
    Delta(String),
    /// Terminal sentinel marking stream completion.
    Done,
}
