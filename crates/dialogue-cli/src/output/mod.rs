//! Output formatting for different modes

pub mod colors;
pub mod human;
pub mod json;
pub mod minimal;

use crate::cli::{Cli, OutputFormat};
use dialogue_core::parse_turns;

/// Print a converted string result. `key` names it in JSON output; `human`
/// renders the terminal view.
pub fn print_result(
    cli: &Cli,
    key: &str,
    result: &str,
    human: impl FnOnce(&str) -> String,
) -> anyhow::Result<()> {
    match cli.effective_format() {
        OutputFormat::Human => println!("{}", human(result)),
        OutputFormat::Json => println!("{}", json::render(&json::wrap(key, result), cli.pretty)?),
        OutputFormat::Minimal => print!("{}", minimal::format_result(result)),
    }
    Ok(())
}

/// Human view for Text form results
pub fn human_text(text: &str) -> String {
    human::format_turns("Turns", &parse_turns(text))
}
