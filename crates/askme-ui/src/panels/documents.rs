//! Documents panel — pick and upload a file, list uploaded documents.

use egui::{self, RichText, Vec2};
use askme_types::event::Control;
use crate::state::UiState;
use crate::theme::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentsAction {
    /// Open the browser file dialog
    ChooseFile,
    /// Upload the picked file
    Upload,
    /// Use this document as chat context
    Select(String),
    /// Summarize this document server-side
    Summarize(String),
}

pub fn documents_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<DocumentsAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.label(RichText::new("Documents").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.horizontal(|ui| {
                if ui.button("Choose file").clicked() {
                    action = Some(DocumentsAction::ChooseFile);
                }
                let picked = state.picked_file.as_deref().unwrap_or("No file selected");
                ui.label(RichText::new(picked).color(TEXT_SECONDARY).small());
            });

            let uploading = state.is_busy(Control::Upload);
            let label = if uploading { "Uploading..." } else { "Upload" };
            if ui
                .add_enabled(
                    !uploading,
                    egui::Button::new(RichText::new(label).color(TEXT_PRIMARY))
                        .fill(if uploading { BG_SURFACE } else { ACCENT })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(80.0, 0.0)),
                )
                .clicked()
            {
                action = Some(DocumentsAction::Upload);
            }

            if state.documents.is_empty() {
                return;
            }

            ui.add_space(6.0);
            ui.separator();
            let summarizing = state.is_busy(Control::Summarize);
            for entry in &state.documents {
                ui.horizontal(|ui| {
                    let active = state.active_article.as_deref() == Some(entry.document_id.as_str());
                    if ui
                        .selectable_label(active, entry.label())
                        .on_hover_text("Use as context for chat")
                        .clicked()
                    {
                        action = Some(DocumentsAction::Select(entry.document_id.clone()));
                    }
                    if ui
                        .add_enabled(!summarizing, egui::Button::new("Summarize").small())
                        .clicked()
                    {
                        action = Some(DocumentsAction::Summarize(entry.document_id.clone()));
                    }
                });
            }
        });

    action
}
