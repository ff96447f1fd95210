use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who a bubble belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Anything other than `"user"` renders on the assistant side.
    pub fn parse(s: &str) -> Self {
        if s == "user" {
            Role::User
        } else {
            Role::Assistant
        }
    }
}

/// What a log entry displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum BubbleBody {
    Text(String),
    /// Server-rendered markup, kept verbatim
    Html(String),
    /// Inline image, e.g. a generated diagram
    Image(String),
}

impl BubbleBody {
    pub fn as_str(&self) -> &str {
        match self {
            BubbleBody::Text(s) | BubbleBody::Html(s) | BubbleBody::Image(s) => s,
        }
    }
}

/// One rendered unit of the chat log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub body: BubbleBody,
    /// Local wall-clock time, `HH:MM`
    pub timestamp: String,
}

impl ChatMessage {
    fn now(role: Role, body: BubbleBody) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            body,
            timestamp: chrono::Local::now().format("%H:%M").to_string(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::now(Role::User, BubbleBody::Text(text.into()))
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::now(Role::Assistant, BubbleBody::Text(text.into()))
    }

    pub fn assistant_html(html: impl Into<String>) -> Self {
        Self::now(Role::Assistant, BubbleBody::Html(html.into()))
    }

    pub fn diagram(url: impl Into<String>) -> Self {
        Self::now(Role::Assistant, BubbleBody::Image(url.into()))
    }

    /// Rebuild a bubble from a server-side history record.
    ///
    /// `timestamp` is an ISO-8601 datetime; anything unparseable is shown as-is.
    pub fn from_history(role: &str, text: impl Into<String>, timestamp: &str) -> Self {
        let shown = chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|_| timestamp.to_string());
        Self {
            id: Uuid::new_v4(),
            role: Role::parse(role),
            body: BubbleBody::Text(text.into()),
            timestamp: shown,
        }
    }
}

/// Identifies one transient "typing" indicator in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoaderHandle(pub Uuid);

impl LoaderHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LoaderHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// An uploaded document shown in the document list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub filename: String,
    pub document_id: String,
}

impl DocumentEntry {
    pub fn label(&self) -> String {
        format!("{} ({})", self.filename, self.document_id)
    }
}
