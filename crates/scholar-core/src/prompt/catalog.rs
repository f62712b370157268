//! Static catalog mapping a response style to an agent instruction string.

use scholar_types::agent::ResponseStyle;

/// Resolve the instruction string for a response style.
///
/// Pure lookup, total over the enum, no failure mode.
pub fn instruction_for(style: ResponseStyle) -> &'static str {
    match style {
        ResponseStyle::Simple => {
            "Give a short, clear, and factual response for any academic or research question."
        }
        ResponseStyle::ExplainLikeImFive => {
            "Explain the answer in very simple, easy-to-understand terms, like to a 5-year-old."
        }
        ResponseStyle::Technical => {
            "Provide a detailed and technical explanation with examples, references, or formulas \
             if needed."
        }
    }
}
