//! Plain-text document extractor.
//!
//! Treats the document blob as UTF-8 text. Invalid sequences are replaced
//! rather than failing, matching the collaborator contract: regions with no
//! extractable text contribute nothing. PDF and other binary-format backends
//! plug in behind the same [`DocumentExtractor`] trait.

use scholar_core::document::DocumentExtractor;
use scholar_types::error::ExtractError;

/// Extractor for plain-text and markdown documents.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}
