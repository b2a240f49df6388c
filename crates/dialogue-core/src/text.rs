//! Text form parsing and rendering
//!
//! Turns are `Speaker: utterance` blocks separated by one blank line. A blank
//! line only ends a turn when the next line starts with a speaker label, so
//! blank lines inside an utterance stay with it.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::types::{Turn, SUB_PARAGRAPH};

/// Blank line followed by a speaker label. Only the first two bytes (the
/// blank line) belong to the boundary; the label starts the next block.
static TURN_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n[A-Za-z0-9_-]+:").unwrap());

static SPEAKER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z0-9_-]+):\s*").unwrap());

static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Split text into turn blocks at blank lines that precede a speaker label
pub fn split_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;

    for boundary in TURN_BOUNDARY.find_iter(text) {
        blocks.push(&text[start..boundary.start()]);
        start = boundary.start() + 2;
    }
    blocks.push(&text[start..]);

    blocks
}

/// Parse Text form into turns.
///
/// Blocks without a leading speaker label (preamble, garbled lines) are
/// dropped with a warning rather than failing the whole transcript.
pub fn parse_turns(text: &str) -> Vec<Turn> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut turns = Vec::new();
    let mut skipped = 0usize;

    for block in split_blocks(trimmed) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let Some(caps) = SPEAKER_PREFIX.captures(block) else {
            warn!(block = %block, "skipping block that does not start with a speaker label");
            skipped += 1;
            continue;
        };

        let prefix_len = caps[0].len();
        turns.push(Turn::new(&caps[1], collapse_paragraphs(&block[prefix_len..])));
    }

    debug!(turns = turns.len(), skipped, "parsed text transcript");
    turns
}

/// Render turns as Text form, one block per turn
pub fn render_turns(turns: &[Turn]) -> String {
    let mut text = String::new();
    for turn in turns {
        push_turn(&mut text, &turn.speaker, &turn.utterance);
    }
    text
}

/// Collapse runs of blank lines into the sub-paragraph marker, then trim
pub(crate) fn collapse_paragraphs(utterance: &str) -> String {
    BLANK_LINE_RUN
        .replace_all(utterance, SUB_PARAGRAPH)
        .trim()
        .to_string()
}

pub(crate) fn push_turn(out: &mut String, speaker: &str, utterance: &str) {
    out.push_str(speaker);
    out.push_str(": ");
    out.push_str(utterance);
    out.push_str("\n\n");
}
