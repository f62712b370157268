//! Prompt catalog and tool prompt templates.

pub mod builder;
pub mod catalog;
