//! Messages form conversion
//!
//! Documents convert to role-tagged messages; messages render back to Text
//! form only, dropping the role.

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::document::{extract_turns, value_kind};
use crate::error::{ConvertError, Result};
use crate::text::{collapse_paragraphs, push_turn};
use crate::types::{Message, Role};

/// Speaker that always maps to the system role, compared case-insensitively
pub const SYSTEM_SPEAKER: &str = "INSTRUCTIONS";

/// Role assignment settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleConfig {
    assistant_name: String,
    assistant_upper: String,
}

impl RoleConfig {
    /// Create a config for the given assistant display name.
    ///
    /// Fails with [`ConvertError::MissingConfiguration`] when the name is empty.
    pub fn new(assistant_name: impl Into<String>) -> Result<Self> {
        let assistant_name = assistant_name.into();
        if assistant_name.trim().is_empty() {
            return Err(ConvertError::MissingConfiguration(
                "assistant name is required for role assignment".to_string(),
            ));
        }

        let assistant_upper = assistant_name.to_uppercase();
        Ok(Self {
            assistant_name,
            assistant_upper,
        })
    }

    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    /// Role for a speaker label
    pub fn role_for(&self, speaker: &str) -> Role {
        let speaker = speaker.to_uppercase();
        if speaker == self.assistant_upper {
            Role::Assistant
        } else if speaker == SYSTEM_SPEAKER {
            Role::System
        } else {
            Role::User
        }
    }
}

/// Convert a document into an ordered message list.
///
/// The document must be non-empty and an assistant name must be given.
pub fn document_to_messages(html: &str, assistant_name: &str) -> Result<Vec<Message>> {
    if html.trim().is_empty() {
        return Err(ConvertError::InvalidInput(
            "document must be a non-empty string".to_string(),
        ));
    }
    let roles = RoleConfig::new(assistant_name)?;

    let messages: Vec<Message> = extract_turns(html)
        .into_iter()
        .map(|turn| Message {
            role: roles.role_for(&turn.speaker),
            name: turn.speaker,
            content: turn.utterance,
        })
        .collect();

    debug!(
        messages = messages.len(),
        assistant = %roles.assistant_name(),
        "converted document to messages"
    );
    Ok(messages)
}

/// Render messages as Text form
pub fn messages_to_text(messages: &[Message]) -> String {
    let mut text = String::new();
    for message in messages {
        push_message(&mut text, &message.name, &message.content);
    }
    text
}

/// Render a dynamically typed message list as Text form.
///
/// A non-array input logs an error and yields an empty string. Elements
/// without string `name` and `content` fields are skipped with a warning.
pub fn messages_value_to_text(value: &Value) -> String {
    let Some(items) = value.as_array() else {
        error!(kind = value_kind(value), "message list must be an array");
        return String::new();
    };

    let mut text = String::new();
    for (index, item) in items.iter().enumerate() {
        let name = item.get("name").and_then(Value::as_str);
        let content = item.get("content").and_then(Value::as_str);

        match (name, content) {
            (Some(name), Some(content)) => push_message(&mut text, name, content),
            _ => warn!(index, message = %item, "skipping malformed message"),
        }
    }
    text
}

/// Parse a JSON message list and render it as Text form
pub fn messages_json_to_text(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    Ok(messages_value_to_text(&value))
}

fn push_message(out: &mut String, name: &str, content: &str) {
    push_turn(out, name.trim(), &collapse_paragraphs(content));
}
