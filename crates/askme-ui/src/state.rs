//! UI-level state that drives rendering.
//! A projection of controller events, updated each frame by draining the
//! EventBus, plus the editable widget contents.

use std::collections::{HashSet, VecDeque};

use askme_types::{
    api::Source,
    config::ClientConfig,
    event::{Control, UiEvent},
    message::{ChatMessage, DocumentEntry, LoaderHandle},
};

/// One item in the chat log, in display order
#[derive(Debug, Clone, PartialEq)]
pub enum LogEntry {
    Message(ChatMessage),
    /// "typing" indicator for a request in flight
    Typing(LoaderHandle),
    /// Citations rendered under the preceding answer
    Sources(Vec<Source>),
}

/// State visible to UI panels
pub struct UiState {
    pub log: Vec<LogEntry>,
    pub documents: Vec<DocumentEntry>,
    /// Alerts waiting to be shown, oldest first
    pub pending_alerts: VecDeque<String>,
    busy: HashSet<Control>,
    /// Question input field
    pub input_text: String,
    /// Article textarea
    pub article_text: String,
    pub persona: String,
    pub mode: String,
    pub personas: Vec<String>,
    pub modes: Vec<String>,
    /// Name of the file picked for upload
    pub picked_file: Option<String>,
    /// Document or summary currently used as chat context
    pub active_article: Option<String>,
    pub speech_supported: bool,
}

impl UiState {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            log: Vec::new(),
            documents: Vec::new(),
            pending_alerts: VecDeque::new(),
            busy: HashSet::new(),
            input_text: String::new(),
            article_text: String::new(),
            persona: config.default_persona.clone(),
            mode: config.default_mode.clone(),
            personas: config.personas.clone(),
            modes: config.modes.clone(),
            picked_file: None,
            active_article: None,
            speech_supported: false,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<UiEvent>) {
        for event in events {
            match event {
                UiEvent::Bubble(message) => self.log.push(LogEntry::Message(message)),
                UiEvent::LoaderShown(handle) => self.log.push(LogEntry::Typing(handle)),
                UiEvent::LoaderRemoved(handle) => {
                    let before = self.log.len();
                    self.log.retain(|e| *e != LogEntry::Typing(handle));
                    if self.log.len() == before {
                        log::warn!("Typing indicator {} was never shown", handle.0);
                    }
                }
                UiEvent::Sources(sources) => self.log.push(LogEntry::Sources(sources)),
                UiEvent::DocumentAdded(entry) => self.documents.push(entry),
                UiEvent::Alert(message) => {
                    log::debug!("Alert queued: {}", message);
                    self.pending_alerts.push_back(message);
                }
                UiEvent::BusyChanged { control, busy } => {
                    if busy {
                        self.busy.insert(control);
                    } else {
                        self.busy.remove(&control);
                    }
                }
                UiEvent::Transcript(text) => {
                    log::debug!("Transcript replaces input ({} chars)", text.len());
                    self.input_text = text;
                }
            }
        }
    }

    pub fn is_busy(&self, control: Control) -> bool {
        self.busy.contains(&control)
    }

    /// Any request in flight (keeps egui repainting)
    pub fn any_busy(&self) -> bool {
        !self.busy.is_empty()
    }

    pub fn is_typing(&self) -> bool {
        self.log.iter().any(|e| matches!(e, LogEntry::Typing(_)))
    }

    /// Chat messages only, without indicators or source lists
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.log.iter().filter_map(|e| match e {
            LogEntry::Message(m) => Some(m),
            _ => None,
        })
    }

    /// Hand all pending alerts to the caller.
    pub fn take_alerts(&mut self) -> Vec<String> {
        self.pending_alerts.drain(..).collect()
    }

    /// Take the question out of the input field, leaving it empty.
    /// Returns `None` (and keeps the text) when it is blank.
    pub fn take_question(&mut self) -> Option<String> {
        if self.input_text.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.input_text))
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}
