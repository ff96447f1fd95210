//! Port traits — the hexagonal architecture boundary.
//!
//! Implementations live in `askme-platform` (browser adapters).
//! The controller never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use askme_types::{
    Result, VoiceError,
    api::{
        ChatRequest, ChatResponse, ContextResponse, SummarizeRequest, SummarizeResponse,
        UploadFile, UploadResponse,
    },
};

// ─── Backend API Port ────────────────────────────────────────

#[async_trait(?Send)]
pub trait ApiPort {
    /// `POST /api/chat`
    async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse>;

    /// `POST /api/upload` as multipart form data under the `file` field
    async fn upload(&self, file: &UploadFile) -> Result<UploadResponse>;

    /// `POST /api/summarize`
    async fn summarize(&self, req: &SummarizeRequest) -> Result<SummarizeResponse>;

    /// `GET /api/context/<session_id>` — recent conversation memory
    async fn context(&self, session_id: &str) -> Result<ContextResponse>;
}

// ─── Session Store Port ──────────────────────────────────────

/// Persists the session id across page reloads.
pub trait SessionStore {
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, session_id: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Speech Port ─────────────────────────────────────────────

/// Platform speech-to-text.
///
/// Transcripts are delivered asynchronously as `UiEvent::Transcript` on the
/// event bus the adapter was built with.
pub trait SpeechPort {
    fn is_supported(&self) -> bool;

    /// Begin listening for a single utterance.
    fn start(&self) -> std::result::Result<(), VoiceError>;

    /// True from a successful `start` until the platform ends the capture,
    /// with or without a transcript.
    fn is_listening(&self) -> bool {
        false
    }
}

/// Stand-in for platforms without speech recognition. The mic is inert.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSpeech;

impl SpeechPort for NoSpeech {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(&self) -> std::result::Result<(), VoiceError> {
        Err(VoiceError::Unsupported)
    }
}
