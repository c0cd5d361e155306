//! Shared test-only collaborators for outpane_core.

use crate::editor::{LogEditor, LogEditorOptions, LogEditorProvider, MemoryLogEditor};
use crate::error::OutpaneError;
use crate::export::{MessageSurface, SaveFilenamePicker};
use crate::registry::{BufferRegistry, RegistryListener, RegistryServices};
use crate::settings::{MemorySettingsStore, RegistrySettings, SettingsStore};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

/// Provider that builds in-memory editors and records every creation request.
#[derive(Clone, Default)]
pub(crate) struct RecordingProvider {
    pub(crate) created: Rc<RefCell<Vec<LogEditorOptions>>>,
}

impl LogEditorProvider for RecordingProvider {
    fn create(&mut self, options: LogEditorOptions) -> Box<dyn LogEditor> {
        self.created.borrow_mut().push(options.clone());
        Box::new(MemoryLogEditor::new(options))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PickRequest {
    pub(crate) suggested: String,
    pub(crate) extension: String,
    pub(crate) filter: String,
}

/// Save picker answering from a script; an exhausted script means "cancel".
#[derive(Clone, Default)]
pub(crate) struct ScriptedPicker {
    pub(crate) answers: Rc<RefCell<VecDeque<Option<PathBuf>>>>,
    pub(crate) requests: Rc<RefCell<Vec<PickRequest>>>,
}

impl ScriptedPicker {
    pub(crate) fn answer(&self, path: Option<PathBuf>) {
        self.answers.borrow_mut().push_back(path);
    }
}

impl SaveFilenamePicker for ScriptedPicker {
    fn pick_save_filename(
        &mut self,
        suggested: &str,
        extension: &str,
        filter: &str,
    ) -> Option<PathBuf> {
        self.requests.borrow_mut().push(PickRequest {
            suggested: suggested.to_string(),
            extension: extension.to_string(),
            filter: filter.to_string(),
        });
        self.answers.borrow_mut().pop_front().flatten()
    }
}

/// Message surface collecting shown errors.
#[derive(Clone, Default)]
pub(crate) struct CollectedMessages {
    pub(crate) errors: Rc<RefCell<Vec<String>>>,
}

impl MessageSurface for CollectedMessages {
    fn show_error(&mut self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

/// Settings store whose reads and writes always fail with an I/O error.
#[derive(Clone, Default)]
pub(crate) struct FailingStore {
    pub(crate) loads: Rc<Cell<usize>>,
    pub(crate) saves: Rc<Cell<usize>>,
}

impl SettingsStore for FailingStore {
    fn load(&self) -> Result<Option<RegistrySettings>, OutpaneError> {
        self.loads.set(self.loads.get() + 1);
        Err(std::io::Error::other("settings storage denied").into())
    }

    fn save(&mut self, _settings: &RegistrySettings) -> Result<(), OutpaneError> {
        self.saves.set(self.saves.get() + 1);
        Err(std::io::Error::other("settings storage denied").into())
    }
}

/// Registry plus handles onto its test collaborators.
pub(crate) struct Harness {
    pub(crate) registry: BufferRegistry,
    pub(crate) provider: RecordingProvider,
    pub(crate) picker: ScriptedPicker,
    pub(crate) messages: CollectedMessages,
    pub(crate) store: MemorySettingsStore,
}

/// Builds a registry over in-memory collaborators.
///
/// `saved` plays the role of settings persisted by a previous session.
pub(crate) fn harness_with(
    saved: Option<RegistrySettings>,
    listeners: Vec<Box<dyn RegistryListener>>,
) -> Harness {
    let store = match saved {
        Some(settings) => MemorySettingsStore::with_settings(settings),
        None => MemorySettingsStore::default(),
    };
    let provider = RecordingProvider::default();
    let picker = ScriptedPicker::default();
    let messages = CollectedMessages::default();
    let registry = registry_over(
        Box::new(store.clone()),
        &provider,
        &picker,
        &messages,
        listeners,
    );
    Harness {
        registry,
        provider,
        picker,
        messages,
        store,
    }
}

pub(crate) fn harness() -> Harness {
    harness_with(None, Vec::new())
}

/// Registry with in-memory collaborators over an arbitrary settings store.
pub(crate) fn registry_with_store(settings: Box<dyn SettingsStore>) -> BufferRegistry {
    registry_over(
        settings,
        &RecordingProvider::default(),
        &ScriptedPicker::default(),
        &CollectedMessages::default(),
        Vec::new(),
    )
}

fn registry_over(
    settings: Box<dyn SettingsStore>,
    provider: &RecordingProvider,
    picker: &ScriptedPicker,
    messages: &CollectedMessages,
    listeners: Vec<Box<dyn RegistryListener>>,
) -> BufferRegistry {
    BufferRegistry::new(
        RegistryServices {
            editors: Box::new(provider.clone()),
            save_picker: Box::new(picker.clone()),
            messages: Box::new(messages.clone()),
            settings,
        },
        listeners,
    )
}
