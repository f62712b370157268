//! Document-to-text extractor implementations.

pub mod plain_text;

pub use plain_text::PlainTextExtractor;
