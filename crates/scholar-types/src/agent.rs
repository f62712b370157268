//! Agent configuration and the closed UI-selection enums.
//!
//! `ResponseStyle` and `ToolSelection` are the two selections the UI layer
//! makes per interaction. Both are closed enums so every match over them is
//! checked exhaustively at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::llm::Usage;

/// How the agent should phrase its answers.
///
/// Selected once per interaction; maps 1:1 to an instruction string in the
/// prompt catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStyle {
    Simple,
    #[serde(rename = "eli5")]
    ExplainLikeImFive,
    Technical,
}

impl fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStyle::Simple => write!(f, "simple"),
            ResponseStyle::ExplainLikeImFive => write!(f, "eli5"),
            ResponseStyle::Technical => write!(f, "technical"),
        }
    }
}

impl FromStr for ResponseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(ResponseStyle::Simple),
            "eli5" | "explain-like-im-five" => Ok(ResponseStyle::ExplainLikeImFive),
            "technical" => Ok(ResponseStyle::Technical),
            other => Err(format!("invalid response style: '{other}'")),
        }
    }
}

/// Which research tool the user selected, if any.
///
/// `None` is the plain "ask a research question" path; every other variant
/// selects one fixed prompt template in the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolSelection {
    None,
    PdfSummarization,
    KeywordExtraction,
    ApaReferenceGeneration,
    ConceptExplanation,
}

impl fmt::Display for ToolSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolSelection::None => write!(f, "none"),
            ToolSelection::PdfSummarization => write!(f, "pdf_summarization"),
            ToolSelection::KeywordExtraction => write!(f, "keyword_extraction"),
            ToolSelection::ApaReferenceGeneration => write!(f, "apa_reference_generation"),
            ToolSelection::ConceptExplanation => write!(f, "concept_explanation"),
        }
    }
}

impl FromStr for ToolSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(ToolSelection::None),
            "pdf_summarization" => Ok(ToolSelection::PdfSummarization),
            "keyword_extraction" => Ok(ToolSelection::KeywordExtraction),
            "apa_reference_generation" => Ok(ToolSelection::ApaReferenceGeneration),
            "concept_explanation" => Ok(ToolSelection::ConceptExplanation),
            other => Err(format!("invalid tool selection: '{other}'")),
        }
    }
}

/// One configured conversational agent: a name plus the active instruction
/// string.
///
/// Rebuilt whenever the response style changes; owned by a single
/// `AgentSession` for the duration of one dispatch. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub instructions: String,
}

/// The fully resolved outcome of one `ask` call.
///
/// Consumed immediately by the UI layer; not cached or stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResult {
    /// The generated text, ready for rendering.
    pub final_output: String,
    /// Token usage reported by the provider for this round trip.
    pub usage: Usage,
}
