//! Document-to-text collaborator port and the context-window clip.
//!
//! Extraction itself is a black box behind [`DocumentExtractor`]; the core
//! only cares that bytes go in and concatenated text comes out. Regions with
//! no extractable text contribute nothing.

use scholar_types::error::ExtractError;

/// Hard cap on document payload size, in characters.
///
/// The completion endpoint has a context limit, so document text is clipped
/// to this many characters before template application. Not negotiable.
pub const MAX_DOCUMENT_CHARS: usize = 8000;

/// Clip text to the first [`MAX_DOCUMENT_CHARS`] characters.
///
/// Counts characters, not bytes, so the cut never lands inside a multibyte
/// sequence.
pub fn clip_to_context_window(text: &str) -> &str {
    match text.char_indices().nth(MAX_DOCUMENT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Extracts concatenated text from a binary document blob.
///
/// Implementations live in scholar-infra. A PDF backend would concatenate
/// per-page text here; the trait does not distinguish "empty document" from
/// "nothing could be extracted" -- callers treat whitespace-only output as
/// [`ExtractError::EmptyDocument`].
pub trait DocumentExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}
