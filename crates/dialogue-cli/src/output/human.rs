//! Human-readable output formatting

use super::colors::*;
use dialogue_core::{Message, Turn, SUB_PARAGRAPH};

const INDENT: &str = "  ";

/// Format a turn as a colored speaker line followed by the indented utterance
pub fn format_turn(turn: &Turn) -> String {
    format!(
        "{}\n{}",
        colored_speaker(&turn.speaker),
        indent_paragraphs(&turn.utterance)
    )
}

/// Format a message with its role tag
pub fn format_message(message: &Message) -> String {
    format!(
        "[{}] {}\n{}",
        colored_role(message.role),
        colored_speaker(&message.name),
        indent_paragraphs(&message.content)
    )
}

/// Format a list of turns under a header
pub fn format_turns(title: &str, turns: &[Turn]) -> String {
    if turns.is_empty() {
        return warning("No dialogue turns found");
    }

    let mut out = vec![header(&format!("{} ({})", title, turns.len())), String::new()];
    out.extend(turns.iter().map(format_turn));
    out.join("\n")
}

/// Indent every line; sub-paragraph breaks become a blank line
pub fn indent_paragraphs(text: &str) -> String {
    text.split(SUB_PARAGRAPH)
        .map(|para| {
            para.lines()
                .map(|l| format!("{}{}", INDENT, l))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format a sanitized reply, with a dimmed paragraph count
pub fn format_sanitized(text: &str) -> String {
    if text.is_empty() {
        return warning("Nothing left after sanitizing");
    }
    let paragraphs = text.split(SUB_PARAGRAPH).count();
    format!(
        "{}\n{}",
        label(&format!("{} paragraph(s)", paragraphs)),
        indent_paragraphs(text)
    )
}
