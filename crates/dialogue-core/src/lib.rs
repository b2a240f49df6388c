//! dialogue-core - Core types and conversions for dialogue transcripts
//!
//! A transcript moves between three forms:
//!
//! - **Document form**: HTML `<p class="dialogue">` containers with a speaker span
//! - **Text form**: `Speaker: utterance` blocks separated by one blank line
//! - **Messages form**: role-tagged `{role, name, content}` lists
//!
//! Document and Text convert both ways. Messages are produced from Documents and
//! rendered back to Text only. The [`sanitize`] module cleans model output into
//! the same paragraph convention the Text form uses.

mod dom;

pub mod document;
pub mod error;
pub mod messages;
pub mod sanitize;
pub mod store;
pub mod text;
pub mod turn;
pub mod types;

pub use document::{
    document_to_text, extract_turns, render_document, text_to_document, text_value_to_document,
};
pub use error::{ConvertError, Result};
pub use messages::{
    document_to_messages, messages_json_to_text, messages_to_text, messages_value_to_text,
    RoleConfig,
};
pub use sanitize::{sanitize, sanitize_value};
pub use store::{KeyValueStore, MemoryStore, ObservedStore, StorageEvent, StorageEventKind};
pub use text::{parse_turns, render_turns};
pub use types::*;
