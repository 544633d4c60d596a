//! Immutable corpus of manual documents

use std::fs;
use std::path::Path;

use geoassist_core::{Document, Error, Result};

/// The full set of manual documents, loaded once per process lifetime.
///
/// Never mutated after load; share it via `Arc` across request handlers.
/// All retrieval operations are pure reads, so no synchronization is needed.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Load a corpus from a JSON file containing an array of document records.
    ///
    /// The build step that produces the file already filters out records with
    /// an empty title or near-empty content; records that slip through anyway
    /// are kept as-is rather than rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Corpus(format!("failed to read {}: {}", path.display(), e)))?;
        let documents: Vec<Document> = serde_json::from_str(&raw)
            .map_err(|e| Error::Serialization(format!("invalid corpus JSON: {}", e)))?;
        Ok(Self { documents })
    }

    /// Build a corpus from already-parsed documents.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// All documents, in original corpus order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
