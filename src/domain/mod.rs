//! Core data model shared across the crate.

mod language;

pub use language::Language;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single generated source file.
///
/// Records are produced by the extractor in document order. Names are never
/// deduplicated: two records may carry the same `name`, and downstream
/// consumers resolve that last-write-wins at display time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Opaque identifier, stable for the lifetime of the in-memory session.
    pub id: String,
    /// File name including extension. Non-empty.
    pub name: String,
    /// Extracted text, leading/trailing whitespace trimmed once.
    pub content: String,
    /// Highlighting/preview tag. Never affects content correctness.
    pub language: Language,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, content: &str, language: Language) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            content: content.trim().to_string(),
            language,
        }
    }
}
