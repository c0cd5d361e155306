//! Log-editor collaborators and the bundled in-memory editor.
//!
//! The registry never renders text itself. It asks a [`LogEditorProvider`]
//! for a surface per pane and drives it through [`LogEditor`].

use crate::buffer::{BufferId, ContentType};
use crate::constants::{DEFAULT_ZOOM_LEVEL, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL};
use crate::registry::BufferRegistry;
use chrono::{DateTime, Local};
use uuid::Uuid;

/// Objects a context menu opened on an output pane may act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    /// The registry itself (clear all, save, settings toggles).
    OutputManager,
    /// The pane that was active when the menu opened.
    ActiveOutputPane(BufferId),
}

/// Callback producing context-menu targets for the current registry state.
pub type ContextMenuTargets = fn(&BufferRegistry) -> Vec<MenuTarget>;

/// Creation options for a log editor surface.
#[derive(Debug, Clone)]
pub struct LogEditorOptions {
    pub content_type: ContentType,
    pub menu_id: Uuid,
    pub roles: Vec<&'static str>,
    pub appearance_category: &'static str,
    pub context_menu_targets: ContextMenuTargets,
}

/// A text-display surface backing one output pane.
pub trait LogEditor {
    fn write(&mut self, text: &str);

    fn clear(&mut self);

    /// Full text content, as written.
    fn text(&self) -> String;

    /// Lines as they should be displayed with the current prefixes applied.
    fn display_lines(&self) -> Vec<String>;

    fn select_all(&mut self);

    fn can_copy(&self) -> bool;

    /// Returns the selected text for the clipboard.
    fn copy(&mut self) -> Option<String>;

    fn word_wrap(&self) -> bool;
    fn set_word_wrap(&mut self, value: bool);
    fn show_line_numbers(&self) -> bool;
    fn set_show_line_numbers(&mut self, value: bool);
    fn show_timestamps(&self) -> bool;
    fn set_show_timestamps(&mut self, value: bool);

    fn zoom_level(&self) -> f64 {
        DEFAULT_ZOOM_LEVEL
    }

    /// Request a zoom level; surfaces may clamp it to what they support.
    fn set_zoom_level(&mut self, _zoom_level: f64) {}

    /// Targets for a context menu opened on this surface.
    fn menu_targets(&self, registry: &BufferRegistry) -> Vec<MenuTarget>;
}

/// Factory for log editor surfaces.
pub trait LogEditorProvider {
    fn create(&mut self, options: LogEditorOptions) -> Box<dyn LogEditor>;
}

#[derive(Debug, Clone)]
struct LogLine {
    written_at: DateTime<Local>,
    text: String,
}

/// Line-based in-memory log editor.
///
/// Each line keeps the local time of its first write so timestamps can be
/// toggled after the fact.
#[derive(Debug)]
pub struct MemoryLogEditor {
    options: LogEditorOptions,
    lines: Vec<LogLine>,
    // Last line is still open for appends.
    open_line: bool,
    all_selected: bool,
    word_wrap: bool,
    show_line_numbers: bool,
    show_timestamps: bool,
    zoom_level: f64,
}

impl MemoryLogEditor {
    pub fn new(options: LogEditorOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
            open_line: false,
            all_selected: false,
            word_wrap: false,
            show_line_numbers: false,
            show_timestamps: false,
            zoom_level: DEFAULT_ZOOM_LEVEL,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn push_segment(&mut self, segment: &str, now: DateTime<Local>) {
        match self.lines.last_mut() {
            Some(last) if self.open_line => last.text.push_str(segment),
            _ => self.lines.push(LogLine {
                written_at: now,
                text: segment.to_string(),
            }),
        }
    }
}

impl LogEditor for MemoryLogEditor {
    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let now = Local::now();
        let mut segments = text.split('\n').peekable();
        while let Some(segment) = segments.next() {
            let segment = segment.strip_suffix('\r').unwrap_or(segment);
            let terminated = segments.peek().is_some();
            if !segment.is_empty() || terminated {
                self.push_segment(segment, now);
            }
            if terminated {
                self.open_line = false;
            } else if !segment.is_empty() {
                self.open_line = true;
            }
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.open_line = false;
        self.all_selected = false;
    }

    fn text(&self) -> String {
        let mut out = String::new();
        for (idx, line) in self.lines.iter().enumerate() {
            out.push_str(&line.text);
            let is_last = idx + 1 == self.lines.len();
            if !is_last || !self.open_line {
                out.push('\n');
            }
        }
        out
    }

    fn display_lines(&self) -> Vec<String> {
        let width = self.lines.len().to_string().len();
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                let mut rendered = String::new();
                if self.show_line_numbers {
                    rendered.push_str(&format!("{:>width$}  ", idx + 1, width = width));
                }
                if self.show_timestamps {
                    rendered.push_str(&line.written_at.format("%H:%M:%S%.3f ").to_string());
                }
                rendered.push_str(&line.text);
                rendered
            })
            .collect()
    }

    fn select_all(&mut self) {
        self.all_selected = !self.lines.is_empty();
    }

    fn can_copy(&self) -> bool {
        self.all_selected && !self.lines.is_empty()
    }

    fn copy(&mut self) -> Option<String> {
        self.can_copy().then(|| self.text())
    }

    fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    fn set_word_wrap(&mut self, value: bool) {
        self.word_wrap = value;
    }

    fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    fn set_show_line_numbers(&mut self, value: bool) {
        self.show_line_numbers = value;
    }

    fn show_timestamps(&self) -> bool {
        self.show_timestamps
    }

    fn set_show_timestamps(&mut self, value: bool) {
        self.show_timestamps = value;
    }

    fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    fn set_zoom_level(&mut self, zoom_level: f64) {
        self.zoom_level = zoom_level.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL);
    }

    fn menu_targets(&self, registry: &BufferRegistry) -> Vec<MenuTarget> {
        (self.options.context_menu_targets)(registry)
    }
}

/// Provider creating a [`MemoryLogEditor`] per pane.
#[derive(Debug, Default)]
pub struct MemoryLogEditorProvider;

impl LogEditorProvider for MemoryLogEditorProvider {
    fn create(&mut self, options: LogEditorOptions) -> Box<dyn LogEditor> {
        tracing::debug!(
            content_type = options.content_type.as_str(),
            "creating in-memory log editor"
        );
        Box::new(MemoryLogEditor::new(options))
    }
}
