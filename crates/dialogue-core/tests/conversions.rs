//! End-to-end conversions across the three transcript forms

use dialogue_core::{
    document_to_messages, document_to_text, messages_to_text, messages_value_to_text, sanitize,
    sanitize_value, text_to_document, Message, Role,
};
use serde_json::json;

const TRANSCRIPT: &str = "Alice: Hello there\n\nBOT: Hi! Good to meet you.\n\n";

#[test]
fn text_to_messages_through_document() {
    let html = text_to_document(TRANSCRIPT);
    let messages = document_to_messages(&html, "BOT").unwrap();

    assert_eq!(
        messages,
        vec![
            Message::new(Role::User, "Alice", "Hello there"),
            Message::new(Role::Assistant, "BOT", "Hi! Good to meet you."),
        ]
    );
}

#[test]
fn messages_serialize_as_plain_objects() {
    let html = text_to_document(TRANSCRIPT);
    let messages = document_to_messages(&html, "bot").unwrap();

    assert_eq!(
        serde_json::to_value(&messages).unwrap(),
        json!([
            {"role": "user", "name": "Alice", "content": "Hello there"},
            {"role": "assistant", "name": "BOT", "content": "Hi! Good to meet you."}
        ])
    );
}

#[test]
fn instructions_message_to_text() {
    let messages = vec![Message::new(
        Role::System,
        "INSTRUCTIONS",
        "Be concise.\n\n\nStay on topic.",
    )];
    assert_eq!(
        messages_to_text(&messages),
        "INSTRUCTIONS: Be concise.\n\tStay on topic.\n\n"
    );
}

#[test]
fn document_round_trip_is_exact() {
    let html = concat!(
        r#"<p class="dialogue"><span class="speaker">INSTRUCTIONS</span> Stay kind &amp; brief.</p>"#,
        "\n",
        r#"<p class="dialogue"><span class="speaker">Alice</span> Line one<br />line two<br />&emsp;New &quot;para&quot; isn&#039;t &lt;odd&gt;</p>"#,
        "\n",
        r#"<p class="dialogue"><span class="speaker">BOT</span> Sure.</p>"#,
    );

    assert_eq!(text_to_document(&document_to_text(html)), html);
}

#[test]
fn text_round_trip_through_document() {
    let text = "Alice: first\n\tsecond\nthird\n\nBOT: ok\n\n";
    assert_eq!(document_to_text(&text_to_document(text)), text);
}

#[test]
fn messages_round_trip_to_text_matches_document_text() {
    let html = text_to_document("A: one\n\nB: two\n\n\nstill two");
    let messages = document_to_messages(&html, "B").unwrap();
    assert_eq!(messages_to_text(&messages), document_to_text(&html));
}

#[test]
fn unlabelled_block_is_dropped() {
    let html = text_to_document("Narrator text first.\n\nAlice: hi");
    assert!(!html.contains("Narrator"));
    assert_eq!(document_to_text(&html), "Alice: hi\n\n");
}

#[test]
fn empty_inputs_yield_empty_output() {
    assert_eq!(document_to_text(""), "");
    assert_eq!(document_to_text("  \n\t"), "");
    assert_eq!(text_to_document(""), "");
    assert_eq!(text_to_document("   "), "");
    assert_eq!(sanitize_value(&json!(12)), "");
    assert_eq!(messages_value_to_text(&json!("not a list")), "");
}

#[test]
fn sanitized_model_output_becomes_a_turn() {
    let reply = sanitize("## Answer\n\nYes, **definitely**.\n\n> Source: memory");
    assert_eq!(reply, "Answer\n\tYes, definitely.\n\tSource: memory");

    let messages = vec![Message::new(Role::Assistant, "BOT", reply)];
    let html = text_to_document(&messages_to_text(&messages));
    assert_eq!(
        html,
        r#"<p class="dialogue"><span class="speaker">BOT</span> Answer<br />&emsp;Yes, definitely.<br />&emsp;Source: memory</p>"#
    );
}
