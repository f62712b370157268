//! Shared domain types for Scholar.
//!
//! This crate contains the types used across the Scholar workspace: response
//! styles, tool selections, agent configuration, LLM request/response shapes,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod agent;
pub mod error;
pub mod llm;
