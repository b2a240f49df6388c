//! Core type definitions for dialogue transcripts

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConvertError;

/// Paragraph break inside a single utterance.
///
/// Distinct from the blank line that separates two turns in Text form.
pub const SUB_PARAGRAPH: &str = "\n\t";

/// One speaker/utterance pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: String,
    /// May contain `\n` hard breaks and [`SUB_PARAGRAPH`] markers
    pub utterance: String,
}

impl Turn {
    pub fn new(speaker: impl Into<String>, utterance: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            utterance: utterance.into(),
        }
    }

    /// True when both speaker and utterance are empty
    pub fn is_blank(&self) -> bool {
        self.speaker.is_empty() && self.utterance.is_empty()
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            "system" => Ok(Role::System),
            other => Err(ConvertError::InvalidInput(format!("unknown role: {}", other))),
        }
    }
}

/// A role-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub name: String,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
            content: content.into(),
        }
    }
}
