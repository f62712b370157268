//! Business logic for Scholar: prompt construction and agent dispatch.
//!
//! This crate defines the "ports" (the `LlmProvider` and `DocumentExtractor`
//! traits) that the infrastructure layer implements. It depends only on
//! `scholar-types` -- never on `scholar-infra` or any network/IO crate.

pub mod agent;
pub mod document;
pub mod llm;
pub mod prompt;
