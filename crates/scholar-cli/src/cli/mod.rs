//! CLI command definitions for the `scholar` binary.
//!
//! Uses clap derive macros for argument parsing. One invocation is one
//! interaction: a style, a tool (chosen by subcommand), an input, and a
//! single rendered result or error.

pub mod ask;
pub mod render;
pub mod tools;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use scholar_types::agent::ResponseStyle;

/// Ask research questions and run research tools against an LLM.
#[derive(Parser)]
#[command(name = "scholar", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Response style for the agent.
    #[arg(long, value_enum, default_value_t = StyleArg::Simple, global = true)]
    pub style: StyleArg,

    /// Completion provider to use.
    #[arg(long, value_enum, default_value_t = ProviderArg::Gemini, global = true)]
    pub provider: ProviderArg,

    /// Override the provider's default model.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a research question.
    Ask {
        /// The question to ask.
        #[arg(trailing_var_arg = true)]
        question: Vec<String>,
    },

    /// Summarize a research paper from a document file.
    Summarize {
        /// Document to summarize.
        file: PathBuf,
    },

    /// Extract the most relevant keywords from content.
    Keywords {
        /// File to read; content is read from stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Generate APA references from citation text.
    Apa {
        /// File to read; content is read from stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Explain a concept in simple academic terms.
    Explain {
        /// The concept to explain.
        #[arg(trailing_var_arg = true)]
        concept: Vec<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// CLI-facing response style selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Short, clear, factual responses.
    Simple,
    /// Explain like I'm five.
    Eli5,
    /// Detailed technical explanations.
    Technical,
}

impl From<StyleArg> for ResponseStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Simple => ResponseStyle::Simple,
            StyleArg::Eli5 => ResponseStyle::ExplainLikeImFive,
            StyleArg::Technical => ResponseStyle::Technical,
        }
    }
}

/// CLI-facing provider selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Gemini,
    Openai,
}
