//! Selection and display settings survive a restart through the JSON store.

use outpane_core::editor::MemoryLogEditorProvider;
use outpane_core::export::{MessageSurface, SaveFilenamePicker};
use outpane_core::settings::{JsonSettingsStore, SettingsStore};
use outpane_core::{BufferId, BufferRegistry, RegistryServices};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DEBUGGER: BufferId = BufferId::from_u128(0xd0);
const BUILD: BufferId = BufferId::from_u128(0xb0);

struct CancelPicker;

impl SaveFilenamePicker for CancelPicker {
    fn pick_save_filename(&mut self, _: &str, _: &str, _: &str) -> Option<PathBuf> {
        None
    }
}

struct IgnoreMessages;

impl MessageSurface for IgnoreMessages {
    fn show_error(&mut self, _: &str) {}
}

fn open_registry(settings_path: &Path) -> BufferRegistry {
    BufferRegistry::new(
        RegistryServices {
            editors: Box::new(MemoryLogEditorProvider::default()),
            save_picker: Box::new(CancelPicker),
            messages: Box::new(IgnoreMessages),
            settings: Box::new(JsonSettingsStore::new(settings_path)),
        },
        Vec::new(),
    )
}

#[test]
fn second_session_restores_selection_and_settings() {
    let dir = TempDir::new().expect("temp dir");
    let settings_path = dir.path().join("outpane").join("settings.json");

    {
        let mut first = open_registry(&settings_path);
        first.get_or_create(BUILD, "Build", "text");
        first.get_or_create(DEBUGGER, "Debugger", "text");
        assert!(first.select(DEBUGGER));
        first.set_word_wrap(true);
        first.set_show_line_numbers(true);
    }

    let stored = JsonSettingsStore::new(&settings_path)
        .load()
        .expect("load")
        .expect("settings written");
    assert_eq!(stored.selected_id, Some(DEBUGGER));
    assert!(stored.word_wrap);

    let mut second = open_registry(&settings_path);
    assert!(second.word_wrap());
    assert!(second.show_line_numbers());
    assert_eq!(second.pending_selection(), Some(DEBUGGER));

    second.get_or_create(BUILD, "Build", "text");
    assert_eq!(second.active_id(), Some(BUILD));
    let debugger = second.get_or_create(DEBUGGER, "Debugger", "text");
    assert!(debugger.word_wrap());
    assert!(debugger.show_line_numbers());
    assert_eq!(second.active_id(), Some(DEBUGGER));
}

#[test]
fn corrupt_settings_fall_back_to_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let settings_path = dir.path().join("settings.json");
    std::fs::write(&settings_path, "not json at all").expect("write");

    let mut registry = open_registry(&settings_path);
    assert!(!registry.word_wrap());
    assert!(registry.show_timestamps());
    assert_eq!(registry.pending_selection(), None);

    registry.get_or_create(BUILD, "Build", "text");
    let repaired = JsonSettingsStore::new(&settings_path)
        .load()
        .expect("rewritten settings parse")
        .expect("settings written");
    assert_eq!(repaired.selected_id, Some(BUILD));
}
