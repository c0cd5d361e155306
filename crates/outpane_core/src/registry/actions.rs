//! Commands that operate on the active pane.

use super::BufferRegistry;
use crate::buffer::{BufferId, OutputBuffer};
use crate::constants::{DEFAULT_ZOOM_LEVEL, TEXT_EXTENSION, TEXT_FILES_FILTER};
use crate::export::{suggested_filename, write_text, SaveOutcome};
use tracing::{debug, info, warn};

impl BufferRegistry {
    pub fn can_copy(&self) -> bool {
        self.active().is_some_and(OutputBuffer::can_copy)
    }

    /// Copy the active pane's selection.
    ///
    /// # Returns
    /// Clipboard text, or `None` when there is no active pane or no selection.
    pub fn copy(&mut self) -> Option<String> {
        self.active_mut().and_then(OutputBuffer::copy)
    }

    pub fn can_clear_all(&self) -> bool {
        self.active.is_some()
    }

    /// Clear the active pane's text.
    pub fn clear_all(&mut self) {
        if let Some(buffer) = self.active_mut() {
            buffer.clear();
        }
    }

    pub fn can_save_text(&self) -> bool {
        self.active.is_some()
    }

    /// Save the active pane's text to a file chosen through the save picker.
    ///
    /// Write failures are shown through the message surface and never
    /// propagated.
    pub fn save_text(&mut self) -> SaveOutcome {
        let Some(active) = self.active() else {
            return SaveOutcome::Unavailable;
        };
        let suggested = suggested_filename(active.name());
        let text = active.text();

        let Some(path) = self.services.save_picker.pick_save_filename(
            &suggested,
            TEXT_EXTENSION,
            TEXT_FILES_FILTER,
        ) else {
            debug!("Output export cancelled");
            return SaveOutcome::Cancelled;
        };

        match write_text(&path, &text) {
            Ok(()) => {
                info!("Exported output pane to {}", path.display());
                SaveOutcome::Saved(path)
            }
            Err(err) => {
                let message = format!("Failed to save {}: {}", path.display(), err);
                warn!("{}", message);
                self.services.messages.show_error(&message);
                SaveOutcome::Failed(message)
            }
        }
    }

    pub fn can_select_by_position(&self, index: usize) -> bool {
        index < self.buffers.len()
    }

    /// Activate the pane at `index` in display order.
    ///
    /// # Returns
    /// The activated pane, or `None` without any state change when `index` is
    /// out of range.
    pub fn select_by_position(&mut self, index: usize) -> Option<&OutputBuffer> {
        if !self.can_select_by_position(index) {
            return None;
        }
        let id = self.buffers[index].id();
        self.set_active(id);
        self.buffers.get(index)
    }

    /// Append `text` to the pane with `id`.
    ///
    /// Text for a pane that does not exist yet is dropped.
    ///
    /// # Returns
    /// `true` when the pane exists and received the text.
    pub fn write(&mut self, id: BufferId, text: &str) -> bool {
        match self.find_mut(id) {
            Some(buffer) => {
                buffer.write(text);
                true
            }
            None => {
                debug!("Dropping output for missing pane {}", id);
                false
            }
        }
    }

    /// Like [`write`](Self::write), followed by a line break.
    pub fn write_line(&mut self, id: BufferId, text: &str) -> bool {
        match self.find_mut(id) {
            Some(buffer) => {
                buffer.write_line(text);
                true
            }
            None => {
                debug!("Dropping output for missing pane {}", id);
                false
            }
        }
    }

    /// Zoom level of the active pane, or the default when none is active.
    pub fn zoom_level(&self) -> f64 {
        self.active()
            .map(OutputBuffer::zoom_level)
            .unwrap_or(DEFAULT_ZOOM_LEVEL)
    }

    /// Set the zoom level of the active pane only.
    ///
    /// # Returns
    /// The level the pane settled on after clamping, or `None` when no pane
    /// is active.
    pub fn set_zoom_level(&mut self, zoom_level: f64) -> Option<f64> {
        let buffer = self.active_mut()?;
        buffer.set_zoom_level(zoom_level);
        let applied = buffer.zoom_level();
        debug!("Output pane {} zoom set to {}%", buffer.id(), applied);
        Some(applied)
    }

    /// Step the active pane's zoom by `delta` percent.
    pub fn zoom_by(&mut self, delta: f64) -> Option<f64> {
        let current = self.active()?.zoom_level();
        self.set_zoom_level(current + delta)
    }

    pub fn reset_zoom(&mut self) -> Option<f64> {
        self.set_zoom_level(DEFAULT_ZOOM_LEVEL)
    }
}
