//! Status line and toast notifications.

use super::{OutputWindowApp, StatusMessage, ToastMessage, STATUS_TTL, TOAST_LIMIT, TOAST_TTL};
use crossbeam_channel::Sender;
use eframe::egui;
use outpane_core::export::MessageSurface;
use std::time::Instant;
use tracing::warn;

/// Routes registry error messages to the window's toast queue.
pub(crate) struct ToastSurface {
    tx: Sender<String>,
}

impl ToastSurface {
    pub(crate) fn new(tx: Sender<String>) -> Self {
        Self { tx }
    }
}

impl MessageSurface for ToastSurface {
    fn show_error(&mut self, message: &str) {
        if self.tx.send(message.to_string()).is_err() {
            warn!("output window closed; dropping message: {}", message);
        }
    }
}

impl OutputWindowApp {
    /// Sets the status line and mirrors it into the toast queue.
    pub(super) fn set_status(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.status = Some(StatusMessage {
            text: text.clone(),
            expires_at: Instant::now() + STATUS_TTL,
        });
        self.push_toast(text);
    }

    fn push_toast(&mut self, text: String) {
        let now = Instant::now();
        if let Some(last) = self.toasts.back_mut() {
            if last.text == text {
                last.expires_at = now + TOAST_TTL;
                return;
            }
        }
        self.toasts.push_back(ToastMessage {
            text,
            expires_at: now + TOAST_TTL,
        });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
    }

    pub(super) fn render_toasts(&self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_area"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 40.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                ui.vertical(|ui| {
                    for toast in self.toasts.iter().rev() {
                        egui::Frame::popup(ui.style()).show(ui, |ui| {
                            ui.label(egui::RichText::new(&toast.text).small());
                        });
                    }
                });
            });
    }
}
