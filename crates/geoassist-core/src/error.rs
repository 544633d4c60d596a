//! Error types for GeoAssist

use thiserror::Error;

/// Result type alias used across GeoAssist crates
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the assistant.
///
/// `Validation` and `Configuration` are reported synchronously before any
/// stream is opened; `Network` and `Upstream` can also occur mid-stream, in
/// which case the relay recovers locally instead of escalating them.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream provider error: {0}")]
    Upstream(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Corpus error: {0}")]
    Corpus(String),
}
