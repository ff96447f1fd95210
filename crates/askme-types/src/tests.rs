#[cfg(test)]
mod tests {
    use crate::api::*;
    use crate::message::*;
    use crate::event::*;
    use crate::config::*;
    use crate::error::*;
    use serde_json::json;

    // ─── ChatRequest Tests ───────────────────────────────────

    #[test]
    fn test_chat_request_omits_unset_ids() {
        let req = ChatRequest {
            session_id: None,
            question: "Hello".to_string(),
            mode: "qa".to_string(),
            persona: "default".to_string(),
            article_id: None,
            use_memory: true,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({"question": "Hello", "mode": "qa", "persona": "default", "use_memory": true})
        );
    }

    #[test]
    fn test_chat_request_includes_set_ids() {
        let req = ChatRequest {
            session_id: Some("s1".to_string()),
            question: "Q".to_string(),
            mode: "short".to_string(),
            persona: "auto".to_string(),
            article_id: Some("doc9".to_string()),
            use_memory: true,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["session_id"], "s1");
        assert_eq!(value["article_id"], "doc9");
    }

    #[test]
    fn test_chat_response_minimal() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"session_id":"s1","answer":"Hi there"}"#).unwrap();
        assert_eq!(resp.session_id, "s1");
        assert_eq!(resp.answer, "Hi there");
        assert!(resp.diagram.is_none());
        assert!(resp.sources.is_empty());
    }

    #[test]
    fn test_chat_response_full() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{
                "session_id": "abc",
                "answer": "Cats sleep a lot.",
                "sources": [{"title": "Cat", "url": "https://en.wikipedia.org/wiki/Cat"}],
                "used_kb_chunks": ["c1"],
                "confidence": "medium",
                "diagram": "/api/diagram/x.png"
            }"#,
        )
        .unwrap();
        assert_eq!(resp.diagram.as_deref(), Some("/api/diagram/x.png"));
        assert_eq!(resp.sources.len(), 1);
        assert_eq!(resp.sources[0].title, "Cat");
        assert!(resp.sources[0].snippet.is_empty());
    }

    #[test]
    fn test_chat_response_null_answer() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"session_id":"s1","answer":null,"sources":null}"#).unwrap();
        assert_eq!(resp.session_id, "s1");
        assert!(resp.answer.is_empty());
        assert!(resp.sources.is_empty());
    }

    #[test]
    fn test_chat_response_string_sources() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"answer":"Hi","sources":["https://en.wikipedia.org/wiki/Cat"]}"#,
        )
        .unwrap();
        assert_eq!(resp.answer, "Hi");
        assert_eq!(resp.sources.len(), 1);
        assert_eq!(resp.sources[0].url, "https://en.wikipedia.org/wiki/Cat");
        assert!(resp.sources[0].title.is_empty());
    }

    #[test]
    fn test_chat_response_source_null_fields() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"answer":"Hi","sources":[{"title":"Cat","url":null,"snippet":null}]}"#,
        )
        .unwrap();
        assert_eq!(resp.sources[0].title, "Cat");
        assert!(resp.sources[0].url.is_empty());
        assert!(resp.sources[0].snippet.is_empty());
    }

    #[test]
    fn test_chat_response_malformed_sources_dropped() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"answer":"Hi","sources":[42, null, {}, {"url":"https://a.example"}, ""]}"#,
        )
        .unwrap();
        assert_eq!(resp.sources.len(), 1);
        assert_eq!(resp.sources[0].url, "https://a.example");
    }

    #[test]
    fn test_chat_response_non_string_answer() {
        let resp: ChatResponse = serde_json::from_str(r#"{"answer":42}"#).unwrap();
        assert_eq!(resp.answer, "42");
    }

    // ─── Summarize Tests ─────────────────────────────────────

    #[test]
    fn test_summarize_request_for_text() {
        let value = serde_json::to_value(SummarizeRequest::for_text("Some article", 3)).unwrap();
        assert_eq!(value, json!({"text": "Some article", "sentences": 3}));
    }

    #[test]
    fn test_summarize_request_for_document() {
        let value = serde_json::to_value(SummarizeRequest::for_document("d1", 3)).unwrap();
        assert_eq!(value, json!({"document_id": "d1", "sentences": 3}));
    }

    #[test]
    fn test_summarize_bullet_text() {
        let resp = SummarizeResponse {
            key_points: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        assert_eq!(resp.bullet_text(), "• a\n• b");
    }

    #[test]
    fn test_summarize_bullet_text_empty() {
        assert_eq!(SummarizeResponse::default().bullet_text(), "");
    }

    #[test]
    fn test_summarize_response_missing_fields() {
        let resp: SummarizeResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.summary_id.is_none());
        assert!(resp.html.is_none());
        assert!(resp.key_points.is_empty());
    }

    #[test]
    fn test_summarize_response_empty_strings() {
        let resp: SummarizeResponse = serde_json::from_str(
            r#"{"summary_id":"","html":"","key_points":["a","b"]}"#,
        )
        .unwrap();
        assert_eq!(resp.summary_id.as_deref(), Some(""));
        assert_eq!(resp.html.as_deref(), Some(""));
        assert_eq!(resp.bullet_text(), "• a\n• b");
    }

    #[test]
    fn test_summarize_response_null_fields() {
        let resp: SummarizeResponse =
            serde_json::from_str(r#"{"summary_id":null,"html":null,"key_points":null}"#).unwrap();
        assert!(resp.summary_id.is_none());
        assert!(resp.html.is_none());
        assert!(resp.key_points.is_empty());
    }

    #[test]
    fn test_context_message_null_text() {
        let resp: ContextResponse = serde_json::from_str(
            r#"{"session_id":"s1","messages":[{"role":"user","text":null}]}"#,
        )
        .unwrap();
        assert_eq!(resp.messages[0].role, "user");
        assert!(resp.messages[0].text.is_empty());
        assert!(resp.messages[0].timestamp.is_empty());
    }

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("assistant"), Role::Assistant);
        assert_eq!(Role::parse("system"), Role::Assistant);
    }

    #[test]
    fn test_chat_message_constructors() {
        let user = ChatMessage::user("Hello");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.body, BubbleBody::Text("Hello".to_string()));
        assert_eq!(user.timestamp.len(), 5);

        let html = ChatMessage::assistant_html("<b>x</b>");
        assert_eq!(html.role, Role::Assistant);
        assert_eq!(html.body.as_str(), "<b>x</b>");

        let img = ChatMessage::diagram("http://h/d.png");
        assert!(matches!(img.body, BubbleBody::Image(_)));
    }

    #[test]
    fn test_chat_message_ids_are_unique() {
        let a = ChatMessage::assistant("same");
        let b = ChatMessage::assistant("same");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_chat_message_from_history() {
        let msg = ChatMessage::from_history("user", "earlier", "2024-05-01T09:07:33.123456");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.timestamp, "09:07");
        assert_eq!(msg.body.as_str(), "earlier");
    }

    #[test]
    fn test_chat_message_from_history_bad_timestamp() {
        let msg = ChatMessage::from_history("assistant", "x", "yesterday");
        assert_eq!(msg.timestamp, "yesterday");
    }

    #[test]
    fn test_document_entry_label() {
        let entry = DocumentEntry {
            filename: "cats.txt".to_string(),
            document_id: "d42".to_string(),
        };
        assert_eq!(entry.label(), "cats.txt (d42)");
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_control_all() {
        assert_eq!(Control::all().len(), 3);
    }

    #[test]
    fn test_ui_event_serialization() {
        let event = UiEvent::BusyChanged { control: Control::Upload, busy: true };
        let json = serde_json::to_string(&event).unwrap();
        let back: UiEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.session_key, "session_id");
        assert_eq!(config.speech_language, "en-US");
        assert_eq!(config.summary_sentences, 3);
        assert!(config.personas.contains(&config.default_persona));
        assert!(config.modes.contains(&config.default_mode));
    }

    #[test]
    fn test_config_partial_override() {
        let config = ClientConfig::from_json(r#"{"api_base": "http://localhost:5000/"}"#).unwrap();
        assert_eq!(config.api_base, "http://localhost:5000/");
        assert_eq!(config.summary_sentences, 3);
        assert_eq!(config.endpoint("/api/chat"), "http://localhost:5000/api/chat");
    }

    #[test]
    fn test_config_invalid_json() {
        let err = ClientConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, AskError::Serialization(_)));
    }

    #[test]
    fn test_config_same_origin_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("/api/upload"), "/api/upload");
        assert_eq!(config.context_endpoint("s1"), "/api/context/s1");
    }

    #[test]
    fn test_config_resolve_url() {
        let config = ClientConfig {
            api_base: "http://localhost:5000".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_url("/api/diagram/d.png"),
            "http://localhost:5000/api/diagram/d.png"
        );
        assert_eq!(config.resolve_url("https://cdn/x.png"), "https://cdn/x.png");
        assert_eq!(config.resolve_url("d.png"), "http://localhost:5000/d.png");
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = AskError::Server { status: 429, code: "rate_limited".to_string() };
        assert_eq!(err.to_string(), "Server error: HTTP 429: rate_limited");
        assert_eq!(AskError::Network("offline".to_string()).to_string(), "Network error: offline");
    }

    #[test]
    fn test_error_from_serde() {
        let e = serde_json::from_str::<ChatResponse>("[").unwrap_err();
        let err: AskError = e.into();
        assert!(matches!(err, AskError::Serialization(_)));
    }

    #[test]
    fn test_result_alias() {
        let ok: crate::Result<u8> = Ok(1);
        assert_eq!(ok.unwrap(), 1);
    }

    #[test]
    fn test_voice_error_display() {
        assert!(VoiceError::AlreadyActive.to_string().contains("already"));
        assert!(VoiceError::Failed("x".to_string()).to_string().ends_with("x"));
    }
}
