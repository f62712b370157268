//! Tool prompt builder.
//!
//! Each research tool maps to one fixed template: an instruction lead-in
//! joined to the user-or-document-derived payload with a blank line.
//! `ToolSelection::None` is the plain question path and passes the payload
//! through verbatim.

use scholar_types::agent::ToolSelection;
use scholar_types::error::PromptError;

/// Lead-in phrase for PDF summarization.
pub const PDF_SUMMARY_LEAD_IN: &str = "Summarize the following research paper:";

/// Lead-in phrase for keyword extraction.
pub const KEYWORD_LEAD_IN: &str = "Extract the most relevant keywords from this content:";

/// Lead-in phrase for APA reference generation.
pub const APA_LEAD_IN: &str = "Generate APA references from the following text:";

/// Lead-in phrase for concept explanation.
pub const CONCEPT_LEAD_IN: &str = "Explain the following concept in simple academic terms:";

/// Build the task prompt for a tool from its payload.
///
/// The payload is expected to already be clipped to the context-window limit
/// by the caller (see [`crate::document::clip_to_context_window`]).
///
/// # Errors
///
/// Returns [`PromptError::EmptyPayload`] when the payload is blank or
/// whitespace-only for any tool other than `None`. The caller must not
/// invoke the agent in that case.
pub fn build_prompt(tool: ToolSelection, payload: &str) -> Result<String, PromptError> {
    let lead_in = match tool {
        ToolSelection::None => return Ok(payload.to_string()),
        ToolSelection::PdfSummarization => PDF_SUMMARY_LEAD_IN,
        ToolSelection::KeywordExtraction => KEYWORD_LEAD_IN,
        ToolSelection::ApaReferenceGeneration => APA_LEAD_IN,
        ToolSelection::ConceptExplanation => CONCEPT_LEAD_IN,
    };

    if payload.trim().is_empty() {
        return Err(PromptError::EmptyPayload);
    }

    Ok(format!("{lead_in}\n\n{payload}"))
}
