//! Registry settings and their persistence.

use crate::buffer::BufferId;
use crate::error::OutpaneError;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Process-wide output-pane settings.
///
/// The three display flags are the single source of truth for every pane.
/// `selected_id` records the active pane as of the last change so the next
/// session can restore it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    pub word_wrap: bool,
    pub show_line_numbers: bool,
    pub show_timestamps: bool,
    pub selected_id: Option<BufferId>,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            word_wrap: false,
            show_line_numbers: false,
            show_timestamps: true,
            selected_id: None,
        }
    }
}

impl RegistrySettings {
    /// Selected id with the nil sentinel mapped to `None`.
    pub fn restorable_selection(&self) -> Option<BufferId> {
        self.selected_id.filter(|id| !id.is_nil())
    }
}

/// Key/value storage for [`RegistrySettings`].
pub trait SettingsStore {
    /// Load previously saved settings.
    ///
    /// # Returns
    /// `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    /// Returns an error when stored data cannot be read or decoded.
    fn load(&self) -> Result<Option<RegistrySettings>, OutpaneError>;

    /// Persist `settings`, replacing what was stored.
    ///
    /// # Errors
    /// Returns an error when the backing storage rejects the write.
    fn save(&mut self, settings: &RegistrySettings) -> Result<(), OutpaneError>;
}

/// Settings stored as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Option<RegistrySettings>, OutpaneError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&mut self, settings: &RegistrySettings) -> Result<(), OutpaneError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_string_pretty(settings)?;
        // Write next to the target and rename so a crash never leaves half a file.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, encoded)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

/// In-memory settings store; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    slot: Rc<RefCell<Option<RegistrySettings>>>,
    saves: Rc<Cell<usize>>,
}

impl MemorySettingsStore {
    /// Store pre-populated with `settings`, as if saved by an earlier session.
    pub fn with_settings(settings: RegistrySettings) -> Self {
        let store = Self::default();
        store.slot.replace(Some(settings));
        store
    }

    pub fn current(&self) -> Option<RegistrySettings> {
        self.slot.borrow().clone()
    }

    /// Number of `save` calls observed.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<RegistrySettings>, OutpaneError> {
        Ok(self.current())
    }

    fn save(&mut self, settings: &RegistrySettings) -> Result<(), OutpaneError> {
        self.slot.replace(Some(settings.clone()));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
