//! Research tool commands: summarize, keywords, apa, explain.
//!
//! Each command selects one prompt template. Document-backed tools read
//! their payload from a file (or stdin) through the extractor collaborator;
//! a document that yields no text is a no-op, the same as blank input.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use console::style;

use scholar_core::document::DocumentExtractor;
use scholar_infra::document::PlainTextExtractor;
use scholar_types::agent::{ResponseStyle, ToolSelection};
use scholar_types::error::ExtractError;

use crate::cli::ask::start_spinner;
use crate::cli::render;
use crate::state::AppState;

/// Summarize a research paper from a document file.
pub async fn run_summarize(
    state: &AppState,
    style_sel: ResponseStyle,
    file: &Path,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let text = match extract_document(file) {
        Ok(text) => text,
        Err(ExtractError::EmptyDocument) => {
            // Treated like blank input: the agent is never invoked.
            if !json && !quiet {
                render::print_empty_input_notice("the document");
            }
            return Ok(());
        }
        Err(e) => return Err(e).context(format!("could not read {}", file.display())),
    };

    run_tool(
        state,
        style_sel,
        ToolSelection::PdfSummarization,
        &text,
        "Summarizing...",
        json,
        quiet,
    )
    .await
}

/// Extract keywords from a file or stdin.
pub async fn run_keywords(
    state: &AppState,
    style_sel: ResponseStyle,
    file: Option<&Path>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let content = read_payload(file)?;
    run_tool(
        state,
        style_sel,
        ToolSelection::KeywordExtraction,
        &content,
        "Extracting keywords...",
        json,
        quiet,
    )
    .await
}

/// Generate APA references from a file or stdin.
pub async fn run_apa(
    state: &AppState,
    style_sel: ResponseStyle,
    file: Option<&Path>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let content = read_payload(file)?;
    run_tool(
        state,
        style_sel,
        ToolSelection::ApaReferenceGeneration,
        &content,
        "Generating references...",
        json,
        quiet,
    )
    .await
}

/// Explain a concept in simple academic terms.
pub async fn run_explain(
    state: &AppState,
    style_sel: ResponseStyle,
    concept: &str,
    json: bool,
    quiet: bool,
) -> Result<()> {
    run_tool(
        state,
        style_sel,
        ToolSelection::ConceptExplanation,
        concept,
        "Explaining concept...",
        json,
        quiet,
    )
    .await
}

/// Run one tool dispatch and render the result.
async fn run_tool(
    state: &AppState,
    style_sel: ResponseStyle,
    tool: ToolSelection,
    payload: &str,
    spinner_message: &str,
    json: bool,
    quiet: bool,
) -> Result<()> {
    if payload.trim().is_empty() {
        if !json && !quiet {
            render::print_empty_input_notice("the input");
        }
        return Ok(());
    }

    let spinner = start_spinner(spinner_message, quiet);
    let started = Instant::now();

    let result = state.dispatcher.dispatch(style_sel, tool, payload).await;
    spinner.finish_and_clear();

    let output = result?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "style": style_sel.to_string(),
                "tool": tool.to_string(),
                "model": state.model(),
                "result": output,
            })
        );
        return Ok(());
    }

    if !quiet {
        println!("  {} Done", style("✓").green().bold());
    }
    render::print_result(&output);
    if !quiet {
        render::print_stats_footer(started.elapsed().as_millis() as u64, state.model());
    }

    Ok(())
}

/// Run the document blob through the extractor collaborator.
///
/// Whitespace-only output is reported as [`ExtractError::EmptyDocument`]:
/// the extractor cannot distinguish an empty document from a failed
/// extraction, so both end up here.
fn extract_document(file: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(file).map_err(|e| ExtractError::Io(e.to_string()))?;
    let text = PlainTextExtractor::new().extract_text(&bytes)?;
    if text.trim().is_empty() {
        return Err(ExtractError::EmptyDocument);
    }
    Ok(text)
}

/// Read the tool payload from a file, or from stdin when no file is given.
fn read_payload(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            Ok(PlainTextExtractor::new()
                .extract_text(&bytes)
                .context("extraction failed")?)
        }
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("could not read stdin")?;
            Ok(content)
        }
    }
}
