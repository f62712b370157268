use thiserror::Error;

use crate::llm::LlmError;

/// Errors from prompt construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    /// The payload was blank or whitespace-only for a tool that requires
    /// non-empty input. Recoverable: the caller simply does not invoke the
    /// agent.
    #[error("payload is empty or whitespace-only")]
    EmptyPayload,
}

/// Errors from credential loading at startup.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The credential environment variable is unset or empty. Fatal: the
    /// process must halt before offering any interactive capability.
    #[error("credential '{0}' is not set -- export it before running")]
    Missing(String),
}

/// Errors from the document-to-text collaborator.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read document: {0}")]
    Io(String),

    /// The document yielded no extractable text. The source intent for
    /// "empty document" vs "extraction failure" is ambiguous, so this is
    /// kept as its own variant and handled like an empty payload.
    #[error("document yielded no extractable text")]
    EmptyDocument,
}

/// Errors from one full dispatch cycle.
///
/// Transparent wrappers: a prompt failure or an upstream LLM failure passes
/// through without being caught or transformed.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}
