//! Speaker/utterance extraction from a single dialogue container

use markup5ever_rcdom::Handle;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::dom;
use crate::types::{Turn, SUB_PARAGRAPH};

/// Class carried by the speaker element inside a container
pub const SPEAKER_CLASS: &str = "speaker";

/// `<br>` followed by an em-space, either as entity or as the literal U+2003
/// the serializer emits for it.
static SUB_PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>\s*(?:&emsp;|\x{2003})").unwrap());

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

/// Extract the turn held by a dialogue container.
///
/// Returns `None` unless the container holds exactly one speaker element.
/// The utterance is read from the container's markup after the speaker
/// element, so inline markup survives until [`decode_utterance`] flattens it.
pub fn extract_turn(container: &Handle) -> Option<Turn> {
    let speakers = dom::descendants_matching(container, |node| {
        dom::has_tag_and_class(node, "span", SPEAKER_CLASS)
    });

    let [speaker_node] = speakers.as_slice() else {
        debug!(speakers = speakers.len(), "skipping container without exactly one speaker");
        return None;
    };

    let speaker = dom::text_content(speaker_node).trim().to_string();

    let markup = match utterance_markup(container, speaker_node) {
        Ok(Some(markup)) => markup,
        Ok(None) => {
            warn!(speaker = %speaker, "speaker markup not found in container");
            return None;
        }
        Err(e) => {
            warn!(speaker = %speaker, error = %e, "failed to serialize dialogue container");
            return None;
        }
    };

    Some(Turn {
        speaker,
        utterance: decode_utterance(&markup),
    })
}

/// Container markup following the speaker element, minus one separating space
fn utterance_markup(container: &Handle, speaker: &Handle) -> std::io::Result<Option<String>> {
    let inner = dom::inner_html(container)?;
    let speaker_html = dom::outer_html(speaker)?;

    Ok(inner.find(&speaker_html).map(|start| {
        let rest = &inner[start + speaker_html.len()..];
        rest.strip_prefix(' ').unwrap_or(rest).to_string()
    }))
}

/// Decode utterance markup into plain text.
///
/// Sub-paragraph breaks must be decoded before plain line breaks, otherwise
/// the `<br>` that introduces them would already be gone.
pub fn decode_utterance(markup: &str) -> String {
    let with_paragraphs = SUB_PARAGRAPH_BREAK.replace_all(markup, SUB_PARAGRAPH);
    let with_breaks = LINE_BREAK.replace_all(&with_paragraphs, "\n");

    let fragment = dom::parse(&with_breaks);
    dom::text_content(&fragment.document).trim().to_string()
}
