//! Minimal text output formatting

use dialogue_core::Message;

/// The raw result, newline-terminated unless empty
pub fn format_result(result: &str) -> String {
    if result.is_empty() || result.ends_with('\n') {
        result.to_string()
    } else {
        format!("{}\n", result)
    }
}

/// Messages as one compact JSON array, the form `from-messages` reads back
pub fn format_messages(messages: &[Message]) -> anyhow::Result<String> {
    Ok(serde_json::to_string(messages)?)
}
