//! Toolbar, pane view and status bar rendering.

use super::{OutputWindowApp, PaneAction};
use eframe::egui::{self, RichText, TextWrapMode};
use outpane_core::editor::MenuTarget;

/// Monospace point size at 100% zoom.
const BASE_FONT_SIZE: f32 = 13.0;

impl OutputWindowApp {
    /// Renders the pane picker, display toggles and commands.
    pub(super) fn render_toolbar(&self, ctx: &egui::Context) -> Vec<PaneAction> {
        let mut actions = Vec::new();
        let registry = &self.registry;
        egui::TopBottomPanel::top("output_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Show output from:");
                let active_id = registry.active_id();
                let selected_text = registry
                    .active()
                    .map(|buffer| buffer.name().to_string())
                    .unwrap_or_default();
                ui.add_enabled_ui(!registry.is_empty(), |ui| {
                    egui::ComboBox::from_id_salt("output_pane_picker")
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            for buffer in registry.buffers() {
                                let selected = active_id == Some(buffer.id());
                                if ui.selectable_label(selected, buffer.name()).clicked() {
                                    actions.push(PaneAction::Select(buffer.id()));
                                }
                            }
                        });
                });

                ui.separator();
                let mut word_wrap = registry.word_wrap();
                if ui.checkbox(&mut word_wrap, "Word wrap").changed() {
                    actions.push(PaneAction::SetWordWrap(word_wrap));
                }
                let mut line_numbers = registry.show_line_numbers();
                if ui.checkbox(&mut line_numbers, "Line numbers").changed() {
                    actions.push(PaneAction::SetShowLineNumbers(line_numbers));
                }
                let mut timestamps = registry.show_timestamps();
                if ui.checkbox(&mut timestamps, "Timestamps").changed() {
                    actions.push(PaneAction::SetShowTimestamps(timestamps));
                }

                ui.separator();
                if ui
                    .add_enabled(registry.can_copy(), egui::Button::new("Copy"))
                    .clicked()
                {
                    actions.push(PaneAction::Copy);
                }
                if ui
                    .add_enabled(registry.can_clear_all(), egui::Button::new("Clear All"))
                    .clicked()
                {
                    actions.push(PaneAction::ClearAll);
                }
                if ui
                    .add_enabled(registry.can_save_text(), egui::Button::new("Save…"))
                    .clicked()
                {
                    actions.push(PaneAction::Save);
                }
            });
        });
        actions
    }

    /// Renders the bottom status bar.
    pub(super) fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("output_status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(status) = &self.status {
                        ui.label(RichText::new(&status.text).color(egui::Color32::YELLOW));
                        ui.separator();
                    }
                    ui.label(RichText::new(format!("{} panes", self.registry.len())).small());
                    ui.separator();
                    ui.label(RichText::new(format!("{:.0}%", self.registry.zoom_level())).small());
                    ui.separator();
                    ui.add(
                        egui::Label::new(
                            RichText::new(format!("Settings: {}", self.settings_label))
                                .small()
                                .monospace(),
                        )
                        .truncate(),
                    );
                });
            });
    }

    /// Renders the active pane's lines and its context menu.
    pub(super) fn render_pane(&self, ctx: &egui::Context) -> Vec<PaneAction> {
        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(buffer) = self.registry.active() else {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No output panes yet.").weak());
                });
                return;
            };

            let wrap_mode = if buffer.word_wrap() {
                TextWrapMode::Wrap
            } else {
                TextWrapMode::Extend
            };
            let lines = buffer.editor().display_lines();
            let font_size = BASE_FONT_SIZE * (buffer.zoom_level() / 100.0) as f32;
            let response = egui::ScrollArea::both()
                .id_salt(buffer.id().to_string())
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in &lines {
                        ui.add(
                            egui::Label::new(
                                RichText::new(line.as_str()).monospace().size(font_size),
                            )
                            .wrap_mode(wrap_mode),
                        );
                    }
                })
                .inner_rect;

            let menu_area = ui.interact(
                response,
                egui::Id::new("output_pane_context"),
                egui::Sense::click(),
            );
            let targets = buffer.editor().menu_targets(&self.registry);
            menu_area.context_menu(|ui| {
                for target in &targets {
                    match target {
                        MenuTarget::ActiveOutputPane(_) => {
                            if ui.button("Select All").clicked() {
                                actions.push(PaneAction::SelectAll);
                            }
                            if ui
                                .add_enabled(buffer.can_copy(), egui::Button::new("Copy"))
                                .clicked()
                            {
                                actions.push(PaneAction::Copy);
                            }
                        }
                        MenuTarget::OutputManager => {
                            if ui.button("Clear All").clicked() {
                                actions.push(PaneAction::ClearAll);
                            }
                            if ui.button("Save…").clicked() {
                                actions.push(PaneAction::Save);
                            }
                        }
                    }
                }
            });
        });
        actions
    }
}
