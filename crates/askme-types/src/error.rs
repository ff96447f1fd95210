use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AskError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `code` is the `error` field of the body when present.
    #[error("Server error: HTTP {status}: {code}")]
    Server { status: u16, code: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AskError {
    fn from(e: serde_json::Error) -> Self {
        AskError::Serialization(e.to_string())
    }
}

/// Why a voice capture could not be started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Speech recognition is not supported on this platform")]
    Unsupported,

    #[error("Speech recognition is already listening")]
    AlreadyActive,

    #[error("Speech recognition failed to start: {0}")]
    Failed(String),
}
