use serde::{Deserialize, Serialize};

/// Client configuration.
///
/// Every field has a default, so a partial JSON override is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin the `/api/...` paths are resolved against. Empty means same origin.
    pub api_base: String,
    /// Local storage key holding the session id
    pub session_key: String,
    /// BCP-47 language tag handed to speech recognition
    pub speech_language: String,
    /// Sentence count requested from the summarizer
    pub summary_sentences: u32,
    pub personas: Vec<String>,
    pub modes: Vec<String>,
    pub default_persona: String,
    pub default_mode: String,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            session_key: "session_id".to_string(),
            speech_language: "en-US".to_string(),
            summary_sentences: 3,
            personas: to_strings(&["auto", "teacher", "coder", "coach"]),
            modes: to_strings(&["short", "detailed", "el5", "deep_dive"]),
            default_persona: "auto".to_string(),
            default_mode: "short".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Full URL of an API path such as `/api/chat`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    /// Resolve a URL returned by the server. Absolute URLs pass through,
    /// server-relative paths are joined onto `api_base`.
    pub fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("data:") {
            url.to_string()
        } else if url.starts_with('/') {
            self.endpoint(url)
        } else {
            format!("{}/{}", self.api_base.trim_end_matches('/'), url)
        }
    }

    /// URL of the history endpoint for a session.
    pub fn context_endpoint(&self, session_id: &str) -> String {
        self.endpoint(&format!("/api/context/{}", session_id))
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
