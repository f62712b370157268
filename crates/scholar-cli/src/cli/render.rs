//! Terminal rendering for agent responses.
//!
//! Model replies come back as markdown; `print_result` renders them through
//! termimad. JSON mode bypasses all styling for machine consumption.

use console::style;
use termimad::MadSkin;

/// Build the shared skin for rendering markdown replies.
fn make_skin() -> MadSkin {
    let mut skin = MadSkin::default_dark();
    skin.inline_code
        .set_fg(termimad::crossterm::style::Color::Yellow);
    skin
}

/// Render a markdown reply to the terminal.
pub fn print_result(markdown: &str) {
    let skin = make_skin();
    println!();
    skin.print_text(markdown);
    println!();
}

/// Print the stats footer after a reply.
///
/// Format: "| {time}s . {model}"
pub fn print_stats_footer(response_ms: u64, model: &str) {
    let seconds = response_ms as f64 / 1000.0;
    println!(
        "  {}",
        style(format!("| {seconds:.1}s · {model}")).dim()
    );
}

/// Print the dim no-op notice for blank input.
///
/// Mirrors the front-end guard that suppresses the trigger when the input
/// field is empty: nothing is sent, nothing fails.
pub fn print_empty_input_notice(what: &str) {
    println!(
        "  {} Nothing to send: {what} is empty.",
        style("i").blue().bold()
    );
}
