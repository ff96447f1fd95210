//! Chat panel — conversation log, persona/mode selectors, question input.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use askme_core::controller::ChatSubmission;
use askme_types::{
    api::Source,
    event::Control,
    message::{BubbleBody, ChatMessage, Role},
};
use crate::html;
use crate::state::{LogEntry, UiState};
use crate::theme::*;

/// What the caller should do after rendering the chat panel
#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    Send(ChatSubmission),
    StartVoice,
}

/// Render the chat panel. Returns an action when the user sends or taps the mic.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                header(ui, state);
                ui.separator();

                let available_height = ui.available_height() - 48.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &state.log {
                            match entry {
                                LogEntry::Message(msg) => render_message(ui, msg),
                                LogEntry::Typing(_) => render_typing(ui),
                                LogEntry::Sources(sources) => render_sources(ui, sources),
                            }
                            ui.add_space(4.0);
                        }
                    });

                ui.add_space(8.0);
                action = input_row(ui, state);
            });
        });

    action
}

fn header(ui: &mut egui::Ui, state: &mut UiState) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new("AskMe Pro").color(TEXT_PRIMARY).strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            egui::ComboBox::from_id_salt("mode")
                .selected_text(state.mode.as_str())
                .show_ui(ui, |ui| {
                    for m in &state.modes {
                        ui.selectable_value(&mut state.mode, m.clone(), m.as_str());
                    }
                });
            ui.label(RichText::new("Mode").color(TEXT_SECONDARY).small());

            egui::ComboBox::from_id_salt("persona")
                .selected_text(state.persona.as_str())
                .show_ui(ui, |ui| {
                    for p in &state.personas {
                        ui.selectable_value(&mut state.persona, p.clone(), p.as_str());
                    }
                });
            ui.label(RichText::new("Persona").color(TEXT_SECONDARY).small());
        });
    });
}

fn input_row(ui: &mut egui::Ui, state: &mut UiState) -> Option<ChatAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.input_text)
            .hint_text("Ask anything...")
            .desired_width(ui.available_width() - 130.0)
            .font(egui::FontId::proportional(14.0));
        let response = ui.add(input);

        let send_enabled = !state.is_busy(Control::Send);
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        let mic_btn = ui
            .add_enabled(
                state.speech_supported,
                egui::Button::new(RichText::new("Mic").color(TEXT_PRIMARY))
                    .corner_radius(PANEL_ROUNDING),
            )
            .on_disabled_hover_text("Speech recognition is not available in this browser");

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter || send_btn.clicked() {
            if let Some(question) = state.take_question() {
                action = Some(ChatAction::Send(ChatSubmission {
                    question,
                    persona: state.persona.clone(),
                    mode: state.mode.clone(),
                }));
            }
            response.request_focus();
        }

        if mic_btn.clicked() {
            action = Some(ChatAction::StartVoice);
        }
    });

    action
}

fn render_message(ui: &mut egui::Ui, msg: &ChatMessage) {
    let text = match &msg.body {
        BubbleBody::Image(url) => {
            let max_width = ui.available_width() * DIAGRAM_MAX_WIDTH;
            ui.add_space(4.0);
            ui.add(egui::Image::from_uri(url.clone()).max_width(max_width));
            ui.add_space(4.0);
            return;
        }
        BubbleBody::Text(text) => text.clone(),
        BubbleBody::Html(markup) => html::to_plain_text(markup),
    };

    let (label, label_color, bg) = match msg.role {
        Role::User => ("You", ACCENT, USER_BUBBLE),
        Role::Assistant => ("AskMe", SUCCESS, ASSISTANT_BUBBLE),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_max_width(ui.available_width() * BUBBLE_MAX_WIDTH);
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(label_color).strong().small());
                ui.label(RichText::new(&msg.timestamp).color(TEXT_SECONDARY).small());
            });
            ui.label(RichText::new(text).color(TEXT_PRIMARY));
        });
}

fn render_typing(ui: &mut egui::Ui) {
    egui::Frame::default()
        .fill(ASSISTANT_BUBBLE)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("...").color(TEXT_SECONDARY));
            });
        });
}

fn render_sources(ui: &mut egui::Ui, sources: &[Source]) {
    ui.indent("sources", |ui| {
        ui.label(RichText::new("Sources").color(WARNING).small().strong());
        for source in sources {
            let title = if source.title.is_empty() { &source.url } else { &source.title };
            if source.url.is_empty() {
                ui.label(RichText::new(title.as_str()).color(TEXT_SECONDARY).small());
            } else {
                ui.hyperlink_to(RichText::new(title.as_str()).small(), &source.url);
            }
        }
    });
}
