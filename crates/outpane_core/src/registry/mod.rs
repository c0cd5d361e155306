//! The output-buffer registry.
//!
//! Owns the ordered collection of panes, creates them on demand through the
//! log-editor provider, keeps them sorted by name, tracks the active pane and
//! broadcasts the shared display settings.
//!
//! All access happens on the owning (UI) thread. The registry is not `Send`.

mod actions;

use crate::buffer::{compare_names, BufferId, ContentType, OutputBuffer};
use crate::constants::{LOG_TEXT_EDITOR_MENU_ID, OUTPUT_APPEARANCE_CATEGORY, OUTPUT_TEXT_PANE_ROLE};
use crate::dispatch::DispatchQueue;
use crate::editor::{LogEditorOptions, LogEditorProvider, MenuTarget};
use crate::export::{MessageSurface, SaveFilenamePicker};
use crate::settings::{RegistrySettings, SettingsStore};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, warn};

/// Change notifications published to registry observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A pane was inserted at `index`.
    BufferAdded { id: BufferId, index: usize },
    /// The active pane changed.
    SelectionChanged { id: BufferId },
    WordWrapChanged(bool),
    ShowLineNumbersChanged(bool),
    ShowTimestampsChanged(bool),
}

/// Component initialized once the registry is fully constructed.
pub trait RegistryListener {
    /// Initialization order; lower values run first.
    fn order(&self) -> f64 {
        0.0
    }

    fn initialize(&mut self, registry: &mut BufferRegistry);
}

/// Collaborators the registry depends on.
pub struct RegistryServices {
    pub editors: Box<dyn LogEditorProvider>,
    pub save_picker: Box<dyn SaveFilenamePicker>,
    pub messages: Box<dyn MessageSurface>,
    pub settings: Box<dyn SettingsStore>,
}

/// Ordered collection of output panes.
pub struct BufferRegistry {
    buffers: Vec<OutputBuffer>,
    settings: RegistrySettings,
    // One-shot: the pane to activate the first time it is created.
    pending_selection: Option<BufferId>,
    active: Option<BufferId>,
    services: RegistryServices,
    subscribers: Vec<Sender<RegistryEvent>>,
    deferred: DispatchQueue<BufferRegistry>,
}

impl fmt::Debug for BufferRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferRegistry")
            .field("buffers", &self.buffers)
            .field("settings", &self.settings)
            .field("pending_selection", &self.pending_selection)
            .field("active", &self.active)
            .field("deferred", &self.deferred)
            .finish_non_exhaustive()
    }
}

impl BufferRegistry {
    /// Create a registry, restoring settings from the settings store.
    ///
    /// Listeners are not run here. They are queued and initialize, in
    /// ascending [`RegistryListener::order`], on the next
    /// [`run_deferred`](Self::run_deferred) call.
    ///
    /// # Returns
    /// An empty registry. Settings fall back to defaults when the store
    /// cannot be read.
    pub fn new(
        services: RegistryServices,
        mut listeners: Vec<Box<dyn RegistryListener>>,
    ) -> Self {
        let settings = match services.settings.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => RegistrySettings::default(),
            Err(err) => {
                warn!("Failed to load output settings, using defaults: {}", err);
                RegistrySettings::default()
            }
        };
        let pending_selection = settings.restorable_selection();

        let mut registry = Self {
            buffers: Vec::new(),
            settings,
            pending_selection,
            active: None,
            services,
            subscribers: Vec::new(),
            deferred: DispatchQueue::default(),
        };

        listeners.sort_by(|a, b| a.order().total_cmp(&b.order()));
        registry.deferred.post(move |registry: &mut BufferRegistry| {
            for mut listener in listeners {
                listener.initialize(registry);
            }
        });
        registry
    }

    /// Run tasks queued for this dispatch cycle.
    ///
    /// # Returns
    /// Number of tasks that ran.
    pub fn run_deferred(&mut self) -> usize {
        let batch = self.deferred.take_batch();
        let ran = batch.len();
        for task in batch {
            task(&mut *self);
        }
        ran
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&mut self) -> Receiver<RegistryEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: RegistryEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn persist(&mut self) {
        if let Err(err) = self.services.settings.save(&self.settings) {
            warn!("Failed to persist output settings: {}", err);
        }
    }

    /// Return the pane with `id`, creating it when absent.
    ///
    /// A new pane is inserted before the first pane whose name sorts after
    /// `name` (case-insensitive) and receives the current display settings.
    /// An existing pane is returned unchanged, even when `name` differs from
    /// its stored name.
    pub fn get_or_create(
        &mut self,
        id: BufferId,
        name: impl Into<String>,
        content_type: impl Into<ContentType>,
    ) -> &mut OutputBuffer {
        let name = name.into();
        if let Some(pos) = self.position_of(id) {
            let existing = &mut self.buffers[pos];
            if existing.name() != name {
                warn!(
                    "Output pane {} requested as {:?} but exists as {:?}; keeping existing name",
                    id,
                    name,
                    existing.name()
                );
            }
            return existing;
        }

        let options = LogEditorOptions {
            content_type: content_type.into(),
            menu_id: LOG_TEXT_EDITOR_MENU_ID,
            roles: vec![OUTPUT_TEXT_PANE_ROLE],
            appearance_category: OUTPUT_APPEARANCE_CATEGORY,
            context_menu_targets: BufferRegistry::context_menu_targets,
        };
        let editor = self.services.editors.create(options);
        let mut buffer = OutputBuffer::new(id, name, editor);
        buffer.set_word_wrap(self.settings.word_wrap);
        buffer.set_show_line_numbers(self.settings.show_line_numbers);
        buffer.set_show_timestamps(self.settings.show_timestamps);

        let index = self.sorted_insert_index(buffer.name());
        debug!("Creating output pane {} ({:?}) at {}", id, buffer.name(), index);
        self.buffers.insert(index, buffer);
        for (slot, buffer) in self.buffers.iter_mut().enumerate().skip(index) {
            buffer.set_index(slot);
        }
        self.on_buffer_inserted(id, index);

        &mut self.buffers[index]
    }

    fn sorted_insert_index(&self, name: &str) -> usize {
        self.buffers
            .iter()
            .position(|existing| compare_names(name, existing.name()) == Ordering::Less)
            .unwrap_or(self.buffers.len())
    }

    fn on_buffer_inserted(&mut self, id: BufferId, index: usize) {
        self.emit(RegistryEvent::BufferAdded { id, index });

        if self.active.is_none() {
            if let Some(first) = self.buffers.first().map(OutputBuffer::id) {
                self.set_active(first);
            }
        }

        if self.pending_selection == Some(id) {
            self.pending_selection = None;
            self.set_active(id);
        }
    }

    fn position_of(&self, id: BufferId) -> Option<usize> {
        self.buffers.iter().position(|buffer| buffer.id() == id)
    }

    pub fn find(&self, id: BufferId) -> Option<&OutputBuffer> {
        self.buffers.iter().find(|buffer| buffer.id() == id)
    }

    pub fn find_mut(&mut self, id: BufferId) -> Option<&mut OutputBuffer> {
        self.buffers.iter_mut().find(|buffer| buffer.id() == id)
    }

    /// Panes in display order.
    pub fn buffers(&self) -> &[OutputBuffer] {
        &self.buffers
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Activate the pane with `id`.
    ///
    /// # Returns
    /// `false` (and no state change) when no such pane exists.
    pub fn select(&mut self, id: BufferId) -> bool {
        if self.position_of(id).is_none() {
            warn!("Cannot select unknown output pane {}", id);
            return false;
        }
        self.set_active(id);
        true
    }

    fn set_active(&mut self, id: BufferId) {
        if self.active == Some(id) {
            return;
        }
        self.active = Some(id);
        self.settings.selected_id = Some(id);
        self.persist();
        self.emit(RegistryEvent::SelectionChanged { id });
    }

    pub fn active(&self) -> Option<&OutputBuffer> {
        self.active.and_then(|id| self.find(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut OutputBuffer> {
        let id = self.active?;
        self.find_mut(id)
    }

    pub fn active_id(&self) -> Option<BufferId> {
        self.active
    }

    pub fn has_output_windows(&self) -> bool {
        self.active.is_some()
    }

    /// Id still waiting to be restored from a previous session.
    pub fn pending_selection(&self) -> Option<BufferId> {
        self.pending_selection
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    pub fn word_wrap(&self) -> bool {
        self.settings.word_wrap
    }

    pub fn set_word_wrap(&mut self, value: bool) {
        if self.settings.word_wrap == value {
            return;
        }
        self.settings.word_wrap = value;
        self.persist();
        self.emit(RegistryEvent::WordWrapChanged(value));
        for buffer in &mut self.buffers {
            buffer.set_word_wrap(value);
        }
    }

    pub fn show_line_numbers(&self) -> bool {
        self.settings.show_line_numbers
    }

    pub fn set_show_line_numbers(&mut self, value: bool) {
        if self.settings.show_line_numbers == value {
            return;
        }
        self.settings.show_line_numbers = value;
        self.persist();
        self.emit(RegistryEvent::ShowLineNumbersChanged(value));
        for buffer in &mut self.buffers {
            buffer.set_show_line_numbers(value);
        }
    }

    pub fn show_timestamps(&self) -> bool {
        self.settings.show_timestamps
    }

    pub fn set_show_timestamps(&mut self, value: bool) {
        if self.settings.show_timestamps == value {
            return;
        }
        self.settings.show_timestamps = value;
        self.persist();
        self.emit(RegistryEvent::ShowTimestampsChanged(value));
        for buffer in &mut self.buffers {
            buffer.set_show_timestamps(value);
        }
    }

    /// Context-menu targets for an output pane surface.
    ///
    /// Always offers the registry; adds the active pane when there is one.
    pub fn context_menu_targets(&self) -> Vec<MenuTarget> {
        let mut targets = vec![MenuTarget::OutputManager];
        if let Some(id) = self.active {
            targets.push(MenuTarget::ActiveOutputPane(id));
        }
        targets
    }
}
