//! WASM-target tests for askme-types.
//!
//! Covers the parts that behave differently under wasm32-unknown-unknown
//! (uuid randomness via `js`, chrono local time via `wasmbind`).
//! Run with `wasm-pack test --node`.

use wasm_bindgen_test::*;

use askme_types::api::*;
use askme_types::config::*;
use askme_types::message::*;

#[wasm_bindgen_test]
fn chat_message_has_timestamp() {
    let msg = ChatMessage::user("Hello");
    assert_eq!(msg.timestamp.len(), 5);
    assert_eq!(&msg.timestamp[2..3], ":");
}

#[wasm_bindgen_test]
fn loader_handles_are_unique() {
    assert_ne!(LoaderHandle::new(), LoaderHandle::new());
}

#[wasm_bindgen_test]
fn chat_response_parses() {
    let resp: ChatResponse =
        serde_json::from_str(r#"{"session_id":"s1","answer":"Hi there"}"#).unwrap();
    assert_eq!(resp.answer, "Hi there");
}

#[wasm_bindgen_test]
fn summarize_bullets() {
    let resp: SummarizeResponse =
        serde_json::from_str(r#"{"key_points":["a","b"],"summary_id":"x"}"#).unwrap();
    assert_eq!(resp.bullet_text(), "• a\n• b");
    assert_eq!(resp.summary_id.as_deref(), Some("x"));
}

#[wasm_bindgen_test]
fn config_endpoint() {
    let config = ClientConfig {
        api_base: "https://askme.example".to_string(),
        ..Default::default()
    };
    assert_eq!(config.endpoint("/api/summarize"), "https://askme.example/api/summarize");
}
