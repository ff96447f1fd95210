//! UI controller — turns user gestures into backend calls and backend
//! replies into log events.
//!
//! Every action follows the same shape:
//! 1. Validate input (empty input is a silent no-op)
//! 2. Render the optimistic parts (user bubble, typing indicator, busy flag)
//! 3. Await the backend
//! 4. Render the reply, or one fixed failure message
//!
//! Actions are independent. Nothing serialises them, so overlapping chat
//! sends may render their answers out of order.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use askme_types::{
    AskError, VoiceError,
    api::{ChatRequest, ChatResponse, SummarizeRequest, SummarizeResponse, UploadFile},
    config::ClientConfig,
    event::{Control, UiEvent},
    message::{ChatMessage, DocumentEntry, LoaderHandle},
};
use crate::busy::Busy;
use crate::event_bus::EventBus;
use crate::ports::{ApiPort, SessionStore, SpeechPort};

pub const CHAT_FAILURE_MESSAGE: &str = "Sorry, something went wrong. Please try again.";
pub const SUMMARIZE_FAILURE_MESSAGE: &str = "Failed to summarize. Please try again.";
pub const UPLOAD_FAILURE_MESSAGE: &str = "Upload failed";
pub const NO_ANSWER_PLACEHOLDER: &str = "[no answer]";

/// What the user typed plus the selector values at the moment of sending
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSubmission {
    pub question: String,
    pub persona: String,
    pub mode: String,
}

/// Result of one controller action
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Input was empty; nothing was sent or rendered
    Skipped,
    Completed,
    /// The backend call failed; the failure message has already been rendered
    Failed(AskError),
}

struct Inner {
    api: Rc<dyn ApiPort>,
    sessions: Rc<dyn SessionStore>,
    speech: Rc<dyn SpeechPort>,
    bus: EventBus,
    config: ClientConfig,
    busy: Busy,
    session_id: RefCell<Option<String>>,
    current_article_id: RefCell<Option<String>>,
    request_counter: Cell<u64>,
}

/// The controller. Clone-cheap; clones share state.
#[derive(Clone)]
pub struct UiController {
    inner: Rc<Inner>,
}

impl UiController {
    /// Build a controller, picking up a previously persisted session id.
    pub fn new(
        config: ClientConfig,
        bus: EventBus,
        api: Rc<dyn ApiPort>,
        sessions: Rc<dyn SessionStore>,
        speech: Rc<dyn SpeechPort>,
    ) -> Self {
        let session_id = match sessions.load() {
            Ok(id) => id.filter(|s| !s.is_empty()),
            Err(e) => {
                log::warn!("Could not read session id from {}: {}", sessions.backend_name(), e);
                None
            }
        };
        if let Some(ref id) = session_id {
            log::info!("Resuming session {}", id);
        }

        Self {
            inner: Rc::new(Inner {
                api,
                sessions,
                speech,
                bus,
                config,
                busy: Busy::new(),
                session_id: RefCell::new(session_id),
                current_article_id: RefCell::new(None),
                request_counter: Cell::new(0),
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn session_id(&self) -> Option<String> {
        self.inner.session_id.borrow().clone()
    }

    pub fn current_article_id(&self) -> Option<String> {
        self.inner.current_article_id.borrow().clone()
    }

    pub fn is_busy(&self, control: Control) -> bool {
        self.inner.busy.is_busy(control)
    }

    pub fn speech_supported(&self) -> bool {
        self.inner.speech.is_supported()
    }

    pub fn is_listening(&self) -> bool {
        self.inner.speech.is_listening()
    }

    // ─── Chat ────────────────────────────────────────────────

    pub async fn send_chat(&self, submission: ChatSubmission) -> Outcome {
        if submission.question.trim().is_empty() {
            return Outcome::Skipped;
        }

        let req = ChatRequest {
            session_id: self.session_id(),
            question: submission.question.clone(),
            mode: submission.mode,
            persona: submission.persona,
            article_id: self.current_article_id(),
            use_memory: true,
        };

        self.emit(UiEvent::Bubble(ChatMessage::user(submission.question)));
        let loader = self.show_loader();
        let _busy = self.inner.busy.acquire(Control::Send, &self.inner.bus);
        let n = self.next_request();
        log::debug!("chat #{} sent (persona={}, mode={})", n, req.persona, req.mode);

        let result = self.inner.api.chat(&req).await;
        self.emit(UiEvent::LoaderRemoved(loader));

        match result {
            Ok(resp) => {
                log::debug!("chat #{} answered", n);
                self.render_answer(resp);
                Outcome::Completed
            }
            Err(e) => {
                log::error!("chat #{} failed: {}", n, e);
                self.emit(UiEvent::Bubble(ChatMessage::assistant(CHAT_FAILURE_MESSAGE)));
                Outcome::Failed(e)
            }
        }
    }

    fn render_answer(&self, resp: ChatResponse) {
        self.adopt_session(&resp.session_id);

        let answer = if resp.answer.is_empty() {
            NO_ANSWER_PLACEHOLDER.to_string()
        } else {
            resp.answer
        };
        self.emit(UiEvent::Bubble(ChatMessage::assistant(answer)));

        if let Some(url) = resp.diagram.filter(|u| !u.is_empty()) {
            let url = self.inner.config.resolve_url(&url);
            self.emit(UiEvent::Bubble(ChatMessage::diagram(url)));
        }

        if !resp.sources.is_empty() {
            self.emit(UiEvent::Sources(resp.sources));
        }
    }

    /// The first session id handed out by the server sticks for good.
    fn adopt_session(&self, returned: &str) {
        if self.inner.session_id.borrow().is_some() || returned.is_empty() {
            return;
        }
        *self.inner.session_id.borrow_mut() = Some(returned.to_string());
        if let Err(e) = self.inner.sessions.save(returned) {
            log::warn!(
                "Could not persist session id to {}: {}",
                self.inner.sessions.backend_name(),
                e
            );
        }
        log::info!("Started session {}", returned);
    }

    /// Replay server-side memory for a resumed session. Failures stay silent.
    pub async fn restore_history(&self) -> Outcome {
        let session_id = match self.session_id() {
            Some(id) => id,
            None => return Outcome::Skipped,
        };

        match self.inner.api.context(&session_id).await {
            Ok(ctx) => {
                log::info!("Restored {} messages for session {}", ctx.messages.len(), session_id);
                for m in ctx.messages {
                    self.emit(UiEvent::Bubble(ChatMessage::from_history(
                        &m.role,
                        m.text,
                        &m.timestamp,
                    )));
                }
                Outcome::Completed
            }
            Err(e) => {
                log::warn!("Could not restore history for {}: {}", session_id, e);
                Outcome::Failed(e)
            }
        }
    }

    // ─── Documents ───────────────────────────────────────────

    pub async fn upload_document(&self, file: Option<UploadFile>) -> Outcome {
        let file = match file {
            Some(f) => f,
            None => return Outcome::Skipped,
        };

        let _busy = self.inner.busy.acquire(Control::Upload, &self.inner.bus);
        let n = self.next_request();
        log::debug!("upload #{} sent ({}, {} bytes)", n, file.name, file.bytes.len());

        match self.inner.api.upload(&file).await {
            Ok(resp) => {
                log::info!("Uploaded {} as {}", resp.filename, resp.document_id);
                self.emit(UiEvent::DocumentAdded(DocumentEntry {
                    filename: resp.filename,
                    document_id: resp.document_id,
                }));
                Outcome::Completed
            }
            Err(e) => {
                log::error!("upload #{} failed: {}", n, e);
                self.emit(UiEvent::Alert(UPLOAD_FAILURE_MESSAGE.to_string()));
                Outcome::Failed(e)
            }
        }
    }

    /// Make a listed document the context for later chat calls.
    pub fn select_document(&self, document_id: &str) {
        log::debug!("Current article set to {}", document_id);
        *self.inner.current_article_id.borrow_mut() = Some(document_id.to_string());
    }

    // ─── Summaries ───────────────────────────────────────────

    pub async fn summarize_article(&self, text: &str) -> Outcome {
        let text = text.trim();
        if text.is_empty() {
            return Outcome::Skipped;
        }
        let req = SummarizeRequest::for_text(text, self.inner.config.summary_sentences);
        self.summarize(req).await
    }

    /// Summarize an uploaded document by id instead of pasted text.
    pub async fn summarize_document(&self, document_id: &str) -> Outcome {
        if document_id.is_empty() {
            return Outcome::Skipped;
        }
        let req = SummarizeRequest::for_document(document_id, self.inner.config.summary_sentences);
        self.summarize(req).await
    }

    async fn summarize(&self, req: SummarizeRequest) -> Outcome {
        let _busy = self.inner.busy.acquire(Control::Summarize, &self.inner.bus);
        let loader = self.show_loader();
        let n = self.next_request();
        log::debug!("summarize #{} sent", n);

        let result = self.inner.api.summarize(&req).await;
        self.emit(UiEvent::LoaderRemoved(loader));

        match result {
            Ok(resp) => {
                self.render_summary(resp);
                Outcome::Completed
            }
            Err(e) => {
                log::error!("summarize #{} failed: {}", n, e);
                self.emit(UiEvent::Bubble(ChatMessage::assistant(SUMMARIZE_FAILURE_MESSAGE)));
                Outcome::Failed(e)
            }
        }
    }

    fn render_summary(&self, resp: SummarizeResponse) {
        let summary_id = resp.summary_id.clone().filter(|s| !s.is_empty());
        *self.inner.current_article_id.borrow_mut() = summary_id;

        let bubble = match resp.html.as_deref() {
            Some(html) if !html.is_empty() => ChatMessage::assistant_html(html),
            _ => ChatMessage::assistant(resp.bullet_text()),
        };
        self.emit(UiEvent::Bubble(bubble));
    }

    // ─── Voice ───────────────────────────────────────────────

    /// Start listening. The transcript arrives later on the event bus.
    pub fn start_voice(&self) -> Result<(), VoiceError> {
        let result = self.inner.speech.start();
        match &result {
            Ok(()) => log::debug!("Voice capture started"),
            Err(VoiceError::Unsupported) => {}
            Err(e) => log::debug!("Voice capture not started: {}", e),
        }
        result
    }

    // ─── Helpers ─────────────────────────────────────────────

    fn emit(&self, event: UiEvent) {
        self.inner.bus.emit(event);
    }

    fn show_loader(&self) -> LoaderHandle {
        let handle = LoaderHandle::new();
        self.emit(UiEvent::LoaderShown(handle));
        handle
    }

    fn next_request(&self) -> u64 {
        let n = self.inner.request_counter.get() + 1;
        self.inner.request_counter.set(n);
        n
    }
}
