//! Summarize panel — article textarea and summarize button.

use egui::{self, RichText, Vec2};
use askme_types::event::Control;
use crate::state::UiState;
use crate::theme::*;

/// Returns the article text when the user asks for a summary.
pub fn summarize_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.label(RichText::new("Summarize").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.add(
                egui::TextEdit::multiline(&mut state.article_text)
                    .hint_text("Paste an article...")
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );

            let busy = state.is_busy(Control::Summarize);
            let clicked = ui
                .add_enabled(
                    !busy,
                    egui::Button::new(RichText::new("Summarize").color(TEXT_PRIMARY))
                        .fill(if busy { BG_SURFACE } else { ACCENT })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(80.0, 0.0)),
                )
                .clicked();

            if clicked && !state.article_text.trim().is_empty() {
                submitted = Some(state.article_text.clone());
            }
        });

    submitted
}
