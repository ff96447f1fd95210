use serde::{Deserialize, Serialize};
use crate::api::Source;
use crate::message::{ChatMessage, DocumentEntry, LoaderHandle};

/// A button whose busy state is tracked while its request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Send,
    Upload,
    Summarize,
}

impl Control {
    pub fn all() -> &'static [Control] {
        &[Control::Send, Control::Upload, Control::Summarize]
    }
}

/// Events emitted by the controller.
/// The UI drains these every frame and projects them onto its state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    /// Append a bubble to the chat log
    Bubble(ChatMessage),

    /// Show a "typing" indicator at the end of the log
    LoaderShown(LoaderHandle),

    /// Remove a previously shown indicator
    LoaderRemoved(LoaderHandle),

    /// Citations for the preceding answer
    Sources(Vec<Source>),

    /// A document finished uploading
    DocumentAdded(DocumentEntry),

    /// Blocking notification for the user
    Alert(String),

    /// A control entered or left its busy state
    BusyChanged { control: Control, busy: bool },

    /// Speech recognition produced a transcript for the input field
    Transcript(String),
}
