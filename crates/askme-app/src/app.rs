//! Main egui application — composes all panels and drives the controller.

use std::rc::Rc;
use std::time::Duration;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use askme_core::controller::{Outcome, UiController};
use askme_core::event_bus::EventBus;
use askme_core::ports::{NoSpeech, SpeechPort};
use askme_platform::file_picker::FilePicker;
use askme_platform::http::HttpApiClient;
use askme_platform::speech::WebSpeechRecognizer;
use askme_platform::storage::auto_detect_session_store;
use askme_types::config::ClientConfig;
use askme_ui::panels::chat::{self, ChatAction};
use askme_ui::panels::documents::{self, DocumentsAction};
use askme_ui::panels::summarize;
use askme_ui::state::UiState;
use askme_ui::theme;

const UPLOAD_ACCEPT: &str = ".txt,.md,.pdf";
/// How often to poll for a transcript while the microphone is open
const VOICE_POLL: Duration = Duration::from_millis(250);

/// The main application state
pub struct AskMeApp {
    ui_state: UiState,
    event_bus: EventBus,
    controller: UiController,
    file_picker: Option<FilePicker>,
}

impl AskMeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClientConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        theme::apply_theme(&cc.egui_ctx);

        let event_bus = EventBus::new();
        let api = Rc::new(HttpApiClient::new(config.clone()));
        let sessions = auto_detect_session_store(&config.session_key);

        let speech: Rc<dyn SpeechPort> = if WebSpeechRecognizer::is_available() {
            match WebSpeechRecognizer::new(&config.speech_language, event_bus.clone()) {
                Ok(recognizer) => Rc::new(recognizer),
                Err(e) => {
                    log::warn!("Speech recognition unavailable: {}. Mic disabled.", e);
                    Rc::new(NoSpeech)
                }
            }
        } else {
            log::info!("Speech recognition not supported in this browser");
            Rc::new(NoSpeech)
        };

        let file_picker = match FilePicker::new(UPLOAD_ACCEPT) {
            Ok(picker) => Some(picker),
            Err(e) => {
                log::error!("File picker unavailable: {}", e);
                None
            }
        };

        let mut ui_state = UiState::new(&config);
        let controller = UiController::new(config, event_bus.clone(), api, sessions, speech);
        ui_state.speech_supported = controller.speech_supported();

        Self::restore_history(controller.clone(), cc.egui_ctx.clone());

        Self {
            ui_state,
            event_bus,
            controller,
            file_picker,
        }
    }

    /// Replay the server-side conversation for a resumed session (async)
    fn restore_history(controller: UiController, ctx: egui::Context) {
        if controller.session_id().is_none() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            controller.restore_history().await;
            ctx.request_repaint();
        });
    }

    fn show_alerts(&mut self) {
        let alerts = self.ui_state.take_alerts();
        if alerts.is_empty() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        for message in alerts {
            if let Err(e) = window.alert_with_message(&message) {
                log::warn!("Could not show alert '{}': {:?}", message, e);
            }
        }
    }
}

impl eframe::App for AskMeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain events from the controller
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        self.ui_state.picked_file = self.file_picker.as_ref().and_then(|p| p.selected_name());
        self.ui_state.active_article = self.controller.current_article_id();
        self.show_alerts();

        if self.ui_state.any_busy() {
            ctx.request_repaint();
        }
        // The transcript lands on the bus before capture ends, and the repaint
        // already scheduled drains it
        if self.controller.is_listening() {
            ctx.request_repaint_after(VOICE_POLL);
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("AskMe Pro")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                let session = self
                    .controller
                    .session_id()
                    .unwrap_or_else(|| "new session".to_string());
                ui.label(
                    RichText::new(format!("Session: {}", session))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
            });
        });

        // ── Documents + summarize side panel ─────────────────
        SidePanel::left("documents_panel")
            .min_width(260.0)
            .max_width(360.0)
            .show(ctx, |ui| {
                if let Some(action) = documents::documents_panel(ui, &mut self.ui_state) {
                    self.dispatch_documents(action, ctx);
                }
                ui.add_space(8.0);
                if let Some(text) = summarize::summarize_panel(ui, &mut self.ui_state) {
                    self.dispatch_summarize_article(text, ctx);
                }
            });

        // ── Chat ─────────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = chat::chat_panel(ui, &mut self.ui_state) {
                self.dispatch_chat(action, ctx);
            }
        });
    }
}

impl AskMeApp {
    fn dispatch_chat(&self, action: ChatAction, ctx: &egui::Context) {
        match action {
            ChatAction::Send(submission) => {
                let controller = self.controller.clone();
                let repaint_ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Outcome::Failed(e) = controller.send_chat(submission).await {
                        log::error!("Chat failed: {}", e);
                    }
                    repaint_ctx.request_repaint();
                });
                ctx.request_repaint();
            }
            ChatAction::StartVoice => {
                match self.controller.start_voice() {
                    Ok(()) => ctx.request_repaint_after(VOICE_POLL),
                    Err(e) => log::warn!("Voice input: {}", e),
                }
            }
        }
    }

    fn dispatch_documents(&mut self, action: DocumentsAction, ctx: &egui::Context) {
        match action {
            DocumentsAction::ChooseFile => match &self.file_picker {
                Some(picker) => picker.open(),
                None => self
                    .ui_state
                    .pending_alerts
                    .push_back("File selection is not available".to_string()),
            },
            DocumentsAction::Upload => {
                let file = self.file_picker.as_ref().and_then(|p| p.selected());
                let controller = self.controller.clone();
                let ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Outcome::Failed(e) = controller.upload_document(file).await {
                        log::error!("Upload failed: {}", e);
                    }
                    ctx.request_repaint();
                });
            }
            DocumentsAction::Select(document_id) => {
                self.controller.select_document(&document_id);
            }
            DocumentsAction::Summarize(document_id) => {
                let controller = self.controller.clone();
                let ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Outcome::Failed(e) = controller.summarize_document(&document_id).await {
                        log::error!("Document summary failed: {}", e);
                    }
                    ctx.request_repaint();
                });
            }
        }
    }

    fn dispatch_summarize_article(&self, text: String, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Outcome::Failed(e) = controller.summarize_article(&text).await {
                log::error!("Summary failed: {}", e);
            }
            ctx.request_repaint();
        });
    }
}
