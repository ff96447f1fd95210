#[cfg(test)]
mod tests {
    use crate::html::to_plain_text;
    use crate::state::*;
    use askme_types::api::Source;
    use askme_types::config::ClientConfig;
    use askme_types::event::{Control, UiEvent};
    use askme_types::message::*;

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new(&ClientConfig::default());
        assert!(state.log.is_empty());
        assert!(state.documents.is_empty());
        assert!(state.pending_alerts.is_empty());
        assert!(state.input_text.is_empty());
        assert_eq!(state.persona, "auto");
        assert_eq!(state.mode, "short");
        assert_eq!(state.personas.len(), 4);
        assert!(!state.any_busy());
        assert!(!state.is_typing());
        assert!(!state.speech_supported);
    }

    #[test]
    fn test_ui_state_bubbles_in_order() {
        let mut state = UiState::default();
        state.process_events(vec![
            UiEvent::Bubble(ChatMessage::user("Hello")),
            UiEvent::Bubble(ChatMessage::assistant("Hi there")),
        ]);
        let texts: Vec<&str> = state.messages().map(|m| m.body.as_str()).collect();
        assert_eq!(texts, vec!["Hello", "Hi there"]);
        assert_eq!(state.messages().next().unwrap().role, Role::User);
    }

    #[test]
    fn test_ui_state_loader_removed() {
        let mut state = UiState::default();
        let loader = LoaderHandle::new();
        state.process_events(vec![
            UiEvent::Bubble(ChatMessage::user("Hello")),
            UiEvent::LoaderShown(loader),
        ]);
        assert!(state.is_typing());
        assert_eq!(state.log.len(), 2);

        state.process_events(vec![
            UiEvent::LoaderRemoved(loader),
            UiEvent::Bubble(ChatMessage::assistant("Hi")),
        ]);
        assert!(!state.is_typing());
        assert_eq!(state.log.len(), 2);
    }

    #[test]
    fn test_ui_state_removes_only_matching_loader() {
        let mut state = UiState::default();
        let a = LoaderHandle::new();
        let b = LoaderHandle::new();
        state.process_events(vec![UiEvent::LoaderShown(a), UiEvent::LoaderShown(b)]);
        state.process_events(vec![UiEvent::LoaderRemoved(a)]);
        assert_eq!(state.log, vec![LogEntry::Typing(b)]);
    }

    #[test]
    fn test_ui_state_unknown_loader_removal_is_harmless() {
        let mut state = UiState::default();
        state.process_events(vec![UiEvent::Bubble(ChatMessage::user("Hello"))]);
        state.process_events(vec![UiEvent::LoaderRemoved(LoaderHandle::new())]);
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn test_ui_state_html_bubble_kept_verbatim() {
        let mut state = UiState::default();
        let html = "<div class=\"summary-card\"><ul><li>a</li></ul></div>";
        state.process_events(vec![UiEvent::Bubble(ChatMessage::assistant_html(html))]);
        let msg = state.messages().next().unwrap();
        assert_eq!(msg.body, BubbleBody::Html(html.to_string()));
    }

    #[test]
    fn test_ui_state_sources_entry() {
        let mut state = UiState::default();
        let sources = vec![Source {
            title: "Cat".to_string(),
            url: "https://en.wikipedia.org/wiki/Cat".to_string(),
            snippet: String::new(),
        }];
        state.process_events(vec![UiEvent::Sources(sources.clone())]);
        assert_eq!(state.log, vec![LogEntry::Sources(sources)]);
        assert_eq!(state.messages().count(), 0);
    }

    #[test]
    fn test_ui_state_documents_and_alerts() {
        let mut state = UiState::default();
        let entry = DocumentEntry {
            filename: "cats.txt".to_string(),
            document_id: "d1".to_string(),
        };
        state.process_events(vec![
            UiEvent::DocumentAdded(entry.clone()),
            UiEvent::Alert("Upload failed".to_string()),
        ]);
        assert_eq!(state.documents, vec![entry]);
        assert!(state.log.is_empty());
        assert_eq!(state.take_alerts(), vec!["Upload failed".to_string()]);
        assert!(state.take_alerts().is_empty());
    }

    #[test]
    fn test_ui_state_busy_flags() {
        let mut state = UiState::default();
        state.process_events(vec![UiEvent::BusyChanged { control: Control::Send, busy: true }]);
        assert!(state.is_busy(Control::Send));
        assert!(!state.is_busy(Control::Upload));
        assert!(state.any_busy());

        state.process_events(vec![UiEvent::BusyChanged { control: Control::Send, busy: false }]);
        assert!(!state.any_busy());
    }

    #[test]
    fn test_ui_state_transcript_replaces_input() {
        let mut state = UiState::default();
        state.input_text = "half typed".to_string();
        state.process_events(vec![UiEvent::Transcript("what is a cat".to_string())]);
        assert_eq!(state.input_text, "what is a cat");
    }

    #[test]
    fn test_take_question_clears_input() {
        let mut state = UiState::default();
        state.input_text = "Hello".to_string();
        assert_eq!(state.take_question(), Some("Hello".to_string()));
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_take_question_blank_kept() {
        let mut state = UiState::default();
        state.input_text = "   ".to_string();
        assert_eq!(state.take_question(), None);
        assert_eq!(state.input_text, "   ");
    }

    // ─── HTML Rendering Tests ────────────────────────────────

    #[test]
    fn test_html_summary_card() {
        let html = "<div class=\"summary-card\"><h4>Summary</h4><ul><li>a</li><li>b</li></ul></div>";
        assert_eq!(to_plain_text(html), "Summary\n• a\n• b");
    }

    #[test]
    fn test_html_plain_text_passthrough() {
        assert_eq!(to_plain_text("just text"), "just text");
    }

    #[test]
    fn test_html_whitespace_collapsed() {
        let html = "<ul>\n  <li>first   point</li>\n  <li>second</li>\n</ul>";
        assert_eq!(to_plain_text(html), "• first point\n• second");
    }

    #[test]
    fn test_html_line_breaks_and_paragraphs() {
        assert_eq!(to_plain_text("one<br>two<br/>three"), "one\ntwo\nthree");
        assert_eq!(to_plain_text("<p>a</p><p>b</p>"), "a\nb");
    }

    #[test]
    fn test_html_entities() {
        assert_eq!(to_plain_text("Tom &amp; Jerry &lt;3 &#39;hi&#39; &#x41;"), "Tom & Jerry <3 'hi' A");
        assert_eq!(to_plain_text("AT&T"), "AT&T");
        assert_eq!(to_plain_text("&bogus;"), "&bogus;");
    }

    #[test]
    fn test_html_inline_tags_dropped() {
        assert_eq!(to_plain_text("<b>bold</b> and <i>italic</i>"), "bold and italic");
    }

    #[test]
    fn test_html_script_skipped() {
        assert_eq!(to_plain_text("a<script>alert(1)</script>b"), "ab");
    }
}
