//! Output buffers: named panes owned by the registry.

use crate::editor::LogEditor;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// Stable identifier of an output buffer.
///
/// Callers reuse the same id across restarts so a persisted selection can be
/// matched when the pane is re-created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BufferId(Uuid);

impl BufferId {
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// `true` for the all-zero id, which persisted settings use as "none".
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Content type tag handed to the log editor when a pane is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentType(String);

impl ContentType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContentType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Compare pane names the way the registry orders them.
///
/// Characters are lowercased with Unicode case folding and compared in order,
/// so `"alpha"` and `"Alpha"` compare equal and `"Beta"` sorts after both.
/// Non-letters order by code point, so `"1x"` sorts before `"_x"`; culture-aware
/// collation would put the punctuation first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// One named output pane.
///
/// Display settings are a projection of the registry's settings; the
/// registry pushes them in and never reads them back.
pub struct OutputBuffer {
    id: BufferId,
    name: String,
    index: usize,
    word_wrap: bool,
    show_line_numbers: bool,
    show_timestamps: bool,
    editor: Box<dyn LogEditor>,
}

impl fmt::Debug for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputBuffer")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("index", &self.index)
            .field("word_wrap", &self.word_wrap)
            .field("show_line_numbers", &self.show_line_numbers)
            .field("show_timestamps", &self.show_timestamps)
            .finish_non_exhaustive()
    }
}

impl OutputBuffer {
    pub(crate) fn new(id: BufferId, name: String, editor: Box<dyn LogEditor>) -> Self {
        Self {
            id,
            name,
            index: 0,
            word_wrap: false,
            show_line_numbers: false,
            show_timestamps: false,
            editor,
        }
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current slot in the registry's ordered collection.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    pub fn show_timestamps(&self) -> bool {
        self.show_timestamps
    }

    pub fn editor(&self) -> &dyn LogEditor {
        self.editor.as_ref()
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn set_word_wrap(&mut self, value: bool) {
        self.word_wrap = value;
        self.editor.set_word_wrap(value);
    }

    pub(crate) fn set_show_line_numbers(&mut self, value: bool) {
        self.show_line_numbers = value;
        self.editor.set_show_line_numbers(value);
    }

    pub(crate) fn set_show_timestamps(&mut self, value: bool) {
        self.show_timestamps = value;
        self.editor.set_show_timestamps(value);
    }

    /// Append `text` to the pane.
    pub fn write(&mut self, text: &str) {
        self.editor.write(text);
    }

    /// Append `text` followed by a line break.
    pub fn write_line(&mut self, text: &str) {
        self.editor.write(text);
        self.editor.write("\n");
    }

    pub fn text(&self) -> String {
        self.editor.text()
    }

    pub fn select_all(&mut self) {
        self.editor.select_all();
    }

    pub fn can_copy(&self) -> bool {
        self.editor.can_copy()
    }

    /// Copy the editor selection.
    ///
    /// # Returns
    /// Text to place on the clipboard, or `None` when nothing is selected.
    pub fn copy(&mut self) -> Option<String> {
        self.editor.copy()
    }

    pub fn clear(&mut self) {
        self.editor.clear();
    }

    pub fn zoom_level(&self) -> f64 {
        self.editor.zoom_level()
    }

    pub fn set_zoom_level(&mut self, zoom_level: f64) {
        self.editor.set_zoom_level(zoom_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_names_ignores_case() {
        assert_eq!(compare_names("alpha", "ALPHA"), Ordering::Equal);
        assert_eq!(compare_names("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_names("Zebra", "alpha"), Ordering::Greater);
        assert_eq!(compare_names("Debug", "debugger"), Ordering::Less);
    }

    #[test]
    fn compare_names_folds_non_ascii_letters() {
        assert_eq!(compare_names("Ärger", "ärger"), Ordering::Equal);
        assert_eq!(compare_names("ÉCLAIR", "éclair"), Ordering::Equal);
    }

    #[test]
    fn compare_names_orders_non_letters_by_code_point() {
        assert_eq!(compare_names("1x", "_x"), Ordering::Less);
        assert_eq!(compare_names("Log 2", "log 10"), Ordering::Greater);
    }

    #[test]
    fn buffer_id_displays_hyphenated_and_detects_nil() {
        let id = BufferId::from_u128(0x6c1b1f0e_5d7a_4c3e_9a55_0f2b7c9d1e33);
        assert_eq!(id.to_string(), "6c1b1f0e-5d7a-4c3e-9a55-0f2b7c9d1e33");
        assert!(BufferId::from_u128(0).is_nil());
        assert!(!BufferId::new_v4().is_nil());
    }

    #[test]
    fn content_type_converts_from_strings() {
        assert_eq!(ContentType::from("text").as_str(), "text");
        assert_eq!(
            ContentType::from("debug-output".to_string()),
            ContentType::new("debug-output")
        );
    }
}
