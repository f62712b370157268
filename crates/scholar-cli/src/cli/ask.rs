//! The plain "ask a research question" command.

use std::time::Instant;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use scholar_types::agent::{ResponseStyle, ToolSelection};

use crate::cli::render;
use crate::state::AppState;

/// Ask a free-form research question (tool `None`: the prompt is the raw
/// question, unmodified).
pub async fn run_ask(
    state: &AppState,
    style_sel: ResponseStyle,
    question: &str,
    json: bool,
    quiet: bool,
) -> Result<()> {
    if question.trim().is_empty() {
        if !json && !quiet {
            render::print_empty_input_notice("the question");
        }
        return Ok(());
    }

    let spinner = start_spinner("Thinking...", quiet);
    let started = Instant::now();

    let result = state
        .dispatcher
        .dispatch(style_sel, ToolSelection::None, question)
        .await;
    spinner.finish_and_clear();

    let answer = result?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "style": style_sel.to_string(),
                "tool": ToolSelection::None.to_string(),
                "model": state.model(),
                "result": answer,
            })
        );
        return Ok(());
    }

    if !quiet {
        println!("  {} Response ready", style("✓").green().bold());
    }
    render::print_result(&answer);
    if !quiet {
        render::print_stats_footer(started.elapsed().as_millis() as u64, state.model());
    }

    Ok(())
}

/// Start the in-flight spinner, disabled in quiet mode.
pub(crate) fn start_spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
