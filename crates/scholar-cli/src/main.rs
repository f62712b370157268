//! Scholar CLI entry point.
//!
//! Binary name: `scholar`
//!
//! Parses CLI arguments, loads the API credential, then dispatches one user
//! action to the agent and renders the result. A missing credential halts
//! the process before any command handler runs.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing::debug;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,scholar=debug",
        _ => "trace",
    };
    scholar_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let outcome = run(cli).await;

    scholar_observe::tracing_setup::shutdown_tracing();
    outcome
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need a credential
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "scholar", &mut std::io::stdout());
        return Ok(());
    }

    // Credential check happens here, before any interactive capability
    let state = AppState::init(cli.provider, cli.model.as_deref())?;
    let style = cli.style.into();
    debug!(provider = ?cli.provider, model = %state.model(), "Dispatching command");

    match cli.command {
        Commands::Ask { question } => {
            cli::ask::run_ask(&state, style, &question.join(" "), cli.json, cli.quiet).await?;
        }

        Commands::Summarize { file } => {
            cli::tools::run_summarize(&state, style, &file, cli.json, cli.quiet).await?;
        }

        Commands::Keywords { file } => {
            cli::tools::run_keywords(&state, style, file.as_deref(), cli.json, cli.quiet).await?;
        }

        Commands::Apa { file } => {
            cli::tools::run_apa(&state, style, file.as_deref(), cli.json, cli.quiet).await?;
        }

        Commands::Explain { concept } => {
            cli::tools::run_explain(&state, style, &concept.join(" "), cli.json, cli.quiet)
                .await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
