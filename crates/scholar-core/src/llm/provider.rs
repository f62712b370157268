//! LlmProvider trait definition.
//!
//! This is the abstraction the completion client implements. One request in,
//! one fully resolved response out: no streaming, no retry, no cancellation.

use scholar_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion-endpoint backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The
/// implementation lives in scholar-infra (`OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini", "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// Performs exactly one round trip. Any non-success response or network
    /// failure surfaces as an [`LlmError`]; nothing is retried or swallowed.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
