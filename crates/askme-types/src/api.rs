//! Request and response bodies of the backend HTTP endpoints.
//!
//! Optional request fields are omitted from the JSON when unset; the backend
//! treats a missing `session_id` as "start a new session".
//!
//! Chat answers and sources are passed through from model output, so response
//! fields accept `null` and loosely shaped values instead of failing the call.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub question: String,
    pub mode: String,
    pub persona: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
    pub use_memory: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub answer: String,
    /// URL of a rendered diagram image, usually a server-relative path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient_sources")]
    pub sources: Vec<Source>,
}

/// A citation attached to a chat answer
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl Source {
    /// Read a citation from either a bare URL string or an object.
    /// Anything else, or an object with neither title nor url, yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(url) if !url.trim().is_empty() => Some(Self {
                title: String::new(),
                url: url.clone(),
                snippet: String::new(),
            }),
            Value::Object(map) => {
                let field = |name: &str| map.get(name).map(value_to_string).unwrap_or_default();
                let source = Self {
                    title: field("title"),
                    url: field("url"),
                    snippet: field("snippet"),
                };
                if source.title.is_empty() && source.url.is_empty() {
                    None
                } else {
                    Some(source)
                }
            }
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Source {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value).unwrap_or_default())
    }
}

/// Response of `POST /api/upload`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    pub document_id: String,
}

/// A file picked by the user, read fully into memory before upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

/// Body of `POST /api/summarize`. Either `text` or `document_id` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    pub sentences: u32,
}

impl SummarizeRequest {
    pub fn for_text(text: impl Into<String>, sentences: u32) -> Self {
        Self {
            text: Some(text.into()),
            document_id: None,
            sentences,
        }
    }

    pub fn for_document(document_id: impl Into<String>, sentences: u32) -> Self {
        Self {
            text: None,
            document_id: Some(document_id.into()),
            sentences,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub summary_id: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub key_points: Vec<String>,
}

impl SummarizeResponse {
    /// Key points as a newline-separated bullet list.
    pub fn bullet_text(&self) -> String {
        self.key_points
            .iter()
            .map(|p| format!("• {}", p))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Response of `GET /api/context/<session_id>`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContextResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_id: String,
    #[serde(default)]
    pub messages: Vec<ContextMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextMessage {
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
}

/// Error body returned alongside non-2xx statuses, e.g. `{"error": "rate_limited"}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// ─── Lenient field readers ───────────────────────────────────

/// `null` becomes empty and non-string scalars keep their JSON text.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_to_string(&Value::deserialize(deserializer)?))
}

/// A list of strings, a single string, or `null`.
fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .filter(|s| !s.is_empty())
            .collect(),
        Value::Null => Vec::new(),
        single => vec![value_to_string(&single)],
    })
}

/// Citations in any shape; malformed entries are dropped.
fn lenient_sources<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Source>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().filter_map(Source::from_value).collect(),
        other => Source::from_value(&other).into_iter().collect(),
    })
}
