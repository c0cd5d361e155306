//! egui application shell around the output-pane registry.

mod feedback;
mod panels;
mod shortcuts;

use crate::listeners::builtin_listeners;
use crate::picker::RfdSavePicker;
use crossbeam_channel::{unbounded, Receiver};
use eframe::egui;
use feedback::ToastSurface;
use outpane_core::editor::MemoryLogEditorProvider;
use outpane_core::export::SaveOutcome;
use outpane_core::constants::ZOOM_STEP;
use outpane_core::settings::{JsonSettingsStore, MemorySettingsStore, SettingsStore};
use outpane_core::{BufferId, BufferRegistry, Config, RegistryEvent, RegistryServices};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

#[doc = "Default initial window size for the output window."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [900.0, 560.0];
#[doc = "Minimum window size keeping the toolbar usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [520.0, 320.0];
const STATUS_TTL: Duration = Duration::from_secs(5);
const TOAST_TTL: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 4;

struct StatusMessage {
    text: String,
    expires_at: Instant,
}

struct ToastMessage {
    text: String,
    expires_at: Instant,
}

/// A user command collected while rendering and applied afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaneAction {
    Select(BufferId),
    SelectPosition(usize),
    SetWordWrap(bool),
    SetShowLineNumbers(bool),
    SetShowTimestamps(bool),
    SelectAll,
    Copy,
    ClearAll,
    Save,
    Zoom(ZoomStep),
}

/// Zoom adjustment applied to the active pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ZoomStep {
    In,
    Out,
    Reset,
}

/// Output window state.
pub(crate) struct OutputWindowApp {
    registry: BufferRegistry,
    registry_events: Receiver<RegistryEvent>,
    notices: Receiver<String>,
    status: Option<StatusMessage>,
    toasts: VecDeque<ToastMessage>,
    clipboard_outgoing: Option<String>,
    settings_label: String,
}

impl OutputWindowApp {
    /// Build the window from runtime configuration.
    ///
    /// Built-in panes are created on the first frame, after the registry
    /// has finished constructing.
    pub(crate) fn new(config: &Config) -> Self {
        let settings: Box<dyn SettingsStore> = if config.ephemeral_settings {
            Box::new(MemorySettingsStore::default())
        } else {
            Box::new(JsonSettingsStore::new(config.settings_path.clone()))
        };
        let settings_label = if config.ephemeral_settings {
            "in memory".to_string()
        } else {
            config.settings_path.display().to_string()
        };
        let (notice_tx, notices) = unbounded();
        let services = RegistryServices {
            editors: Box::new(MemoryLogEditorProvider::default()),
            save_picker: Box::new(RfdSavePicker),
            messages: Box::new(ToastSurface::new(notice_tx)),
            settings,
        };
        let registry = BufferRegistry::new(services, builtin_listeners(settings_label.clone()));
        Self::from_registry(registry, notices, settings_label)
    }

    fn from_registry(
        mut registry: BufferRegistry,
        notices: Receiver<String>,
        settings_label: String,
    ) -> Self {
        let registry_events = registry.subscribe();
        Self {
            registry,
            registry_events,
            notices,
            status: None,
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            clipboard_outgoing: None,
            settings_label,
        }
    }

    fn apply_registry_event(&mut self, event: RegistryEvent) {
        match event {
            RegistryEvent::BufferAdded { id, index } => {
                debug!("output pane {} added at {}", id, index);
            }
            RegistryEvent::SelectionChanged { id } => {
                if let Some(buffer) = self.registry.find(id) {
                    debug!("showing output pane {:?}", buffer.name());
                }
            }
            RegistryEvent::WordWrapChanged(_)
            | RegistryEvent::ShowLineNumbersChanged(_)
            | RegistryEvent::ShowTimestampsChanged(_) => {}
        }
    }

    /// Pump deferred registry work and drain notifications.
    fn pump(&mut self) {
        self.registry.run_deferred();
        while let Ok(event) = self.registry_events.try_recv() {
            self.apply_registry_event(event);
        }
        while let Ok(notice) = self.notices.try_recv() {
            self.set_status(notice);
        }
    }

    pub(crate) fn apply_action(&mut self, action: PaneAction) {
        match action {
            PaneAction::Select(id) => {
                self.registry.select(id);
            }
            PaneAction::SelectPosition(index) => {
                self.registry.select_by_position(index);
            }
            PaneAction::SetWordWrap(value) => self.registry.set_word_wrap(value),
            PaneAction::SetShowLineNumbers(value) => self.registry.set_show_line_numbers(value),
            PaneAction::SetShowTimestamps(value) => self.registry.set_show_timestamps(value),
            PaneAction::SelectAll => {
                if let Some(buffer) = self.registry.active_mut() {
                    buffer.select_all();
                }
            }
            PaneAction::Copy => {
                if let Some(text) = self.registry.copy() {
                    self.clipboard_outgoing = Some(text);
                }
            }
            PaneAction::ClearAll => self.registry.clear_all(),
            PaneAction::Save => {
                if let SaveOutcome::Saved(path) = self.registry.save_text() {
                    self.set_status(format!("Saved output to {}", path.display()));
                }
            }
            PaneAction::Zoom(step) => {
                let applied = match step {
                    ZoomStep::In => self.registry.zoom_by(ZOOM_STEP),
                    ZoomStep::Out => self.registry.zoom_by(-ZOOM_STEP),
                    ZoomStep::Reset => self.registry.reset_zoom(),
                };
                if let Some(level) = applied {
                    debug!("active pane zoom {}%", level);
                }
            }
        }
    }
}

impl eframe::App for OutputWindowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump();

        let now = Instant::now();
        if let Some(status) = &self.status {
            if now >= status.expires_at {
                self.status = None;
            }
        }
        while self
            .toasts
            .front()
            .map(|toast| now >= toast.expires_at)
            .unwrap_or(false)
        {
            self.toasts.pop_front();
        }

        let mut actions = shortcuts::actions_from_input(ctx);
        actions.extend(self.render_toolbar(ctx));
        self.render_status_bar(ctx);
        actions.extend(self.render_pane(ctx));
        for action in actions {
            self.apply_action(action);
        }

        if let Some(text) = self.clipboard_outgoing.take() {
            ctx.send_cmd(egui::OutputCommand::CopyText(text));
        }
        self.render_toasts(ctx);
        if self.status.is_some() || !self.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
