//! Document form (HTML) conversion
//!
//! Each turn is a `<p class="dialogue">` holding a `<span class="speaker">`
//! followed by one space and the escaped utterance. Inside the utterance a
//! `<br />&emsp;` pair marks a sub-paragraph and a bare `<br />` a line break.

use serde_json::Value;
use tracing::debug;

use crate::dom;
use crate::error::{ConvertError, Result};
use crate::text::{parse_turns, render_turns};
use crate::turn::{extract_turn, SPEAKER_CLASS};
use crate::types::Turn;

/// Class carried by every turn container
pub const DIALOGUE_CLASS: &str = "dialogue";

/// Extract every turn from a document, in document order.
///
/// Containers that do not hold exactly one speaker are skipped.
pub fn extract_turns(html: &str) -> Vec<Turn> {
    let dom = dom::parse(html);
    let containers = dom::descendants_matching(&dom.document, |node| {
        dom::has_tag_and_class(node, "p", DIALOGUE_CLASS)
    });

    let turns: Vec<Turn> = containers.iter().filter_map(extract_turn).collect();
    debug!(containers = containers.len(), turns = turns.len(), "extracted document turns");
    turns
}

/// Convert a document to Text form.
///
/// Empty input yields an empty string. Turns with neither speaker nor
/// utterance are left out.
pub fn document_to_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let turns: Vec<Turn> = extract_turns(html)
        .into_iter()
        .filter(|turn| !turn.is_blank())
        .collect();

    render_turns(&turns)
}

/// Convert Text form to a document
pub fn text_to_document(text: &str) -> String {
    render_document(&parse_turns(text))
}

/// [`text_to_document`] for dynamically typed input; anything but a string is rejected
pub fn text_value_to_document(value: &Value) -> Result<String> {
    match value.as_str() {
        Some(text) => Ok(text_to_document(text)),
        None => Err(ConvertError::InvalidInput(format!(
            "text transcript must be a string, got {}",
            value_kind(value)
        ))),
    }
}

/// Render turns as a document, one container per line
pub fn render_document(turns: &[Turn]) -> String {
    let mut html = String::new();

    for turn in turns {
        html.push_str(&format!(
            r#"<p class="{}"><span class="{}">{}</span> {}</p>"#,
            DIALOGUE_CLASS,
            SPEAKER_CLASS,
            escape_markup(&turn.speaker),
            encode_utterance(&turn.utterance)
        ));
        html.push('\n');
    }

    html.trim_end().to_string()
}

/// Escape the five markup-significant characters.
///
/// `&` goes first so the entities introduced afterwards are not escaped again.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape an utterance and encode its sub-paragraph markers and line breaks
pub fn encode_utterance(utterance: &str) -> String {
    escape_markup(utterance)
        .replace('\t', "&emsp;")
        .replace('\n', "<br />")
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
