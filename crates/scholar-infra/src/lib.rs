//! Infrastructure layer for Scholar.
//!
//! Contains implementations of the ports defined in `scholar-core`: the
//! OpenAI-compatible completion client, the environment credential loader,
//! and the plain-text document extractor.

pub mod document;
pub mod llm;
pub mod secret;
