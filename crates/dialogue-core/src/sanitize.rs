//! Markdown removal for model-generated text
//!
//! The output uses the same paragraph convention as Text form: single `\n`
//! for line breaks, `\n\t` between paragraphs.
//!
//! Rules run in the fixed order of [`PIPELINE`]. Later rules rely on earlier
//! ones: fences go before tag stripping, bold before italic, and everything
//! before the paragraph signal (`\n\n`, set up by the first step) is turned
//! into `\n\t`. Line-start rules anchor on horizontal whitespace only so they
//! never eat that signal, and strip a whole run of stacked markers in one match.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::document::value_kind;
use crate::types::SUB_PARAGRAPH;

/// One named rewrite rule
#[derive(Clone, Copy)]
pub struct Step {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Step").field(&self.name).finish()
    }
}

/// Every rule, in application order
pub const PIPELINE: &[Step] = &[
    Step { name: "normalize_newlines", apply: normalize_newlines },
    Step { name: "remove_code_fences", apply: remove_code_fences },
    Step { name: "remove_comments", apply: remove_comments },
    Step { name: "remove_tags", apply: remove_tags },
    Step { name: "remove_horizontal_rules", apply: remove_horizontal_rules },
    Step { name: "remove_blockquote_prefixes", apply: remove_blockquote_prefixes },
    Step { name: "remove_heading_markers", apply: remove_heading_markers },
    Step { name: "remove_setext_underlines", apply: remove_setext_underlines },
    Step { name: "remove_links", apply: remove_links },
    Step { name: "unwrap_inline_code", apply: unwrap_inline_code },
    Step { name: "unwrap_bold", apply: unwrap_bold },
    Step { name: "unwrap_italic", apply: unwrap_italic },
    Step { name: "remove_list_markers", apply: remove_list_markers },
    Step { name: "trim_lines", apply: trim_lines },
    Step { name: "collapse_spaces", apply: collapse_spaces },
    Step { name: "mark_paragraphs", apply: mark_paragraphs },
    Step { name: "finalize", apply: finalize },
];

macro_rules! regex {
    ($name:ident, $pattern:expr) => {
        static $name: Lazy<Regex> = Lazy::new(|| Regex::new($pattern).unwrap());
    };
}

regex!(NEWLINE_RUN, r"\n{3,}");
regex!(BACKTICK_FENCE, r"(?s)`{3,}[^\n]*\n.*?\n`{3,}");
regex!(TILDE_FENCE, r"(?s)~{3,}[^\n]*\n.*?\n~{3,}");
regex!(COMMENT, r"(?s)<!--.*?-->");
regex!(TAG, r"<[^>]+>");
regex!(HORIZONTAL_RULE, r"(?m)^[ \t]*(?:-|\*|_){3,}[ \t]*$");
regex!(BLOCKQUOTE, r"(?m)^[ \t]*(?:>[ \t]*)+");
regex!(HEADING, r"(?m)^[ \t]*(?:#{1,6}[ \t]*)+");
regex!(SETEXT, r"(?m)^([^\n]+)\n[ \t]*(?:=|-){2,}[ \t]*$");
regex!(LINK, r"!?\[.*?\]\(.*?\)");
regex!(INLINE_CODE, r"`([^`]+)`");
regex!(BOLD_STARS, r"\*\*([^*]+?)\*\*");
regex!(BOLD_UNDERSCORES, r"__([^_]+?)__");
regex!(ITALIC_STAR, r"\*([^*]+?)\*");
regex!(ITALIC_UNDERSCORE, r"_([^_]+?)_");
regex!(LIST_MARKER, r"(?m)^[ \t]*(?:(?:[-*+]|\d+\.)[ \t]+)+");
regex!(SPACE_RUN, r" {2,}");
regex!(MARKER_RUN, r"\n\t(?:\n\t?|\t)+");

/// Upper bound on pipeline passes in [`sanitize`]
pub const MAX_PASSES: usize = 8;

/// Strip markdown from `input` and normalize its paragraphs.
///
/// The pipeline is re-run until its output stops changing, at most
/// [`MAX_PASSES`] times, so sanitizing already sanitized text is a no-op.
/// Markup exposed by a later rule (`# > quote`) is removed on the next pass.
pub fn sanitize(input: &str) -> String {
    let mut current = run_pipeline(input);

    for pass in 1..MAX_PASSES {
        let next = run_pipeline(&current);
        if next == current {
            debug!(passes = pass, "sanitized text");
            return current;
        }
        current = next;
    }

    warn!(passes = MAX_PASSES, "sanitizer output did not settle");
    current
}

/// [`sanitize`] for dynamically typed input; non-strings yield an empty string
pub fn sanitize_value(value: &Value) -> String {
    match value.as_str() {
        Some(text) => sanitize(text),
        None => {
            warn!(kind = value_kind(value), "sanitizer received non-string input");
            String::new()
        }
    }
}

/// Apply every step of [`PIPELINE`] once
pub fn run_pipeline(input: &str) -> String {
    PIPELINE
        .iter()
        .fold(input.to_string(), |text, step| (step.apply)(&text))
}

/// Unify line endings and reduce blank-line runs to one `\n\n` paragraph signal.
/// An existing `\n\t` marker counts as a paragraph break.
pub fn normalize_newlines(text: &str) -> String {
    let unified = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(SUB_PARAGRAPH, "\n\n");
    NEWLINE_RUN.replace_all(&unified, "\n\n").into_owned()
}

/// Delete fenced code blocks, content included
pub fn remove_code_fences(text: &str) -> String {
    let text = BACKTICK_FENCE.replace_all(text, "");
    TILDE_FENCE.replace_all(&text, "").into_owned()
}

pub fn remove_comments(text: &str) -> String {
    COMMENT.replace_all(text, "").into_owned()
}

pub fn remove_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

pub fn remove_horizontal_rules(text: &str) -> String {
    HORIZONTAL_RULE.replace_all(text, "").into_owned()
}

pub fn remove_blockquote_prefixes(text: &str) -> String {
    BLOCKQUOTE.replace_all(text, "").into_owned()
}

pub fn remove_heading_markers(text: &str) -> String {
    HEADING.replace_all(text, "").into_owned()
}

/// `Title\n=====` becomes `Title`
pub fn remove_setext_underlines(text: &str) -> String {
    SETEXT.replace_all(text, "${1}").into_owned()
}

/// Delete links and images outright, label and URL alike
pub fn remove_links(text: &str) -> String {
    LINK.replace_all(text, "").into_owned()
}

pub fn unwrap_inline_code(text: &str) -> String {
    INLINE_CODE.replace_all(text, "${1}").into_owned()
}

pub fn unwrap_bold(text: &str) -> String {
    let text = BOLD_STARS.replace_all(text, "${1}");
    BOLD_UNDERSCORES.replace_all(&text, "${1}").into_owned()
}

pub fn unwrap_italic(text: &str) -> String {
    let text = ITALIC_STAR.replace_all(text, "${1}");
    ITALIC_UNDERSCORE.replace_all(&text, "${1}").into_owned()
}

pub fn remove_list_markers(text: &str) -> String {
    LIST_MARKER.replace_all(text, "").into_owned()
}

pub fn trim_lines(text: &str) -> String {
    text.split('\n').map(str::trim).collect::<Vec<_>>().join("\n")
}

pub fn collapse_spaces(text: &str) -> String {
    let text = text.replace('\t', " ");
    SPACE_RUN.replace_all(&text, " ").into_owned()
}

pub fn mark_paragraphs(text: &str) -> String {
    text.replace("\n\n", SUB_PARAGRAPH)
}

/// Trim the whole text (a leading marker goes with it) and merge adjacent markers
pub fn finalize(text: &str) -> String {
    MARKER_RUN.replace_all(text.trim(), SUB_PARAGRAPH).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pipeline_order() {
        let names: Vec<&str> = PIPELINE.iter().map(|s| s.name).collect();
        let pos = |name: &str| names.iter().position(|n| *n == name).unwrap();

        assert_eq!(names.first(), Some(&"normalize_newlines"));
        assert_eq!(names.last(), Some(&"finalize"));
        assert!(pos("remove_code_fences") < pos("remove_tags"));
        assert!(pos("remove_comments") < pos("remove_tags"));
        assert!(pos("unwrap_bold") < pos("unwrap_italic"));
        assert!(pos("trim_lines") < pos("mark_paragraphs"));
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc"), "a\nb\nc");
        assert_eq!(normalize_newlines("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_newlines("a\n\tb"), "a\n\nb");
    }

    #[test]
    fn test_remove_code_fences() {
        assert_eq!(remove_code_fences("before\n```rust\nlet x = 1;\n```\nafter"), "before\n\nafter");
        assert_eq!(remove_code_fences("a\n~~~\ncode\n~~~~\nb"), "a\n\nb");
    }

    #[test]
    fn test_remove_comments_and_tags() {
        assert_eq!(remove_comments("a<!-- hidden\nnote -->b"), "ab");
        assert_eq!(remove_tags("<div>x<br/>y</div>"), "xy");
    }

    #[test]
    fn test_remove_horizontal_rules() {
        assert_eq!(remove_horizontal_rules("a\n---\nb\n * * *\nc"), "a\n\nb\n * * *\nc");
        assert_eq!(remove_horizontal_rules("a\n  ___  \nb"), "a\n\nb");
    }

    #[test]
    fn test_blockquote_keeps_content_and_paragraphs() {
        assert_eq!(remove_blockquote_prefixes("> quoted\n>more"), "quoted\nmore");
        assert_eq!(remove_blockquote_prefixes("a\n\n> b"), "a\n\nb");
    }

    #[test]
    fn test_stacked_line_markers_go_in_one_pass() {
        assert_eq!(remove_blockquote_prefixes("> > quoted\n>>> deep"), "quoted\ndeep");
        assert_eq!(remove_heading_markers("### ## Title"), "Title");
        assert_eq!(remove_list_markers("- - item\n1. * nested"), "item\nnested");
        assert_eq!(run_pipeline("> > quoted"), "quoted");
    }

    #[test]
    fn test_deeply_nested_quote() {
        let input = format!("{}x", ">".repeat(10_000));
        assert_eq!(run_pipeline(&input), "x");
        assert_eq!(sanitize(&input), "x");
    }

    #[test]
    fn test_mixed_prefixes_settle_across_passes() {
        assert_eq!(run_pipeline("# > note"), "> note");
        assert_eq!(sanitize("# > note"), "note");
    }

    #[test]
    fn test_headings() {
        assert_eq!(remove_heading_markers("## Section\ntext"), "Section\ntext");
        assert_eq!(remove_setext_underlines("Title\n=====\nbody"), "Title\nbody");
        assert_eq!(remove_setext_underlines("Sub\n--"), "Sub");
    }

    #[test]
    fn test_links_are_removed_entirely() {
        assert_eq!(remove_links("see [docs](http://x.y) and ![img](a.png)."), "see  and .");
    }

    #[test]
    fn test_inline_unwraps() {
        assert_eq!(unwrap_inline_code("run `ls -la` now"), "run ls -la now");
        assert_eq!(unwrap_bold("**a** and __b__"), "a and b");
        assert_eq!(unwrap_italic("*a* and _b_"), "a and b");
    }

    #[test]
    fn test_bold_before_italic() {
        let text = unwrap_italic(&unwrap_bold("**strong** *soft*"));
        assert_eq!(text, "strong soft");
    }

    #[test]
    fn test_list_markers() {
        assert_eq!(remove_list_markers("- a\n* b\n+ c\n12. d"), "a\nb\nc\nd");
        assert_eq!(remove_list_markers("a\n\n- b"), "a\n\nb");
        assert_eq!(remove_list_markers("-not a list"), "-not a list");
    }

    #[test]
    fn test_whitespace_steps() {
        assert_eq!(trim_lines("  a  \n\tb\t"), "a\nb");
        assert_eq!(collapse_spaces("a\tb    c"), "a b c");
        assert_eq!(mark_paragraphs("a\n\nb\nc"), "a\n\tb\nc");
        assert_eq!(finalize("\n\ta\n\t\n\tb\n"), "a\n\tb");
    }

    #[test]
    fn test_sanitize_document() {
        let input = "# Title\n\nThis is **bold** and _italic_ and `code`.\n\n\n- item one\n- item two";
        assert_eq!(
            sanitize(input),
            "Title\n\tThis is bold and italic and code.\n\titem one\nitem two"
        );
    }

    #[test]
    fn test_sanitize_drops_code_and_links() {
        let input = "Intro with [a link](https://example.com).\n\n```python\nprint('x')\n```\n\nOutro.";
        assert_eq!(sanitize(input), "Intro with .\n\tOutro.");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let input = "> Quote\n\n1. First\n2. Second\n\n---\n\n<b>Done</b>   now";
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_sanitize_value_non_string() {
        assert_eq!(sanitize_value(&json!(null)), "");
        assert_eq!(sanitize_value(&json!(["# x"])), "");
        assert_eq!(sanitize_value(&json!("**x**")), "x");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("\n\n\n"), "");
    }
}
