//! Lexical retrieval for GeoAssist
//!
//! This crate holds the in-memory corpus of manual documents and the
//! deterministic lexical scoring engine that selects the top-K relevant
//! documents for a query. No embeddings, no network — pure reads over an
//! immutable corpus.

mod corpus;
mod engine;

#[cfg(test)]
mod tests;

pub use corpus::Corpus;
pub use engine::{search, tokenize};

// Re-export core types for convenience
pub use geoassist_core::{Category, Document, Error, Result};
