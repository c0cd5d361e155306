//! Core library for outpane: the output-pane registry and its collaborators.

/// Output buffers and their identifiers.
pub mod buffer;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants (export filter, menu ids, defaults).
pub mod constants;
/// Deferred single-threaded task queue.
pub mod dispatch;
/// Log-editor collaborator traits and the in-memory editor.
pub mod editor;
/// Application error types.
pub mod error;
/// Export helpers for saving pane text to disk.
pub mod export;
/// Translation between formatter option vocabularies.
pub mod formatter_options;
/// The output-buffer registry.
pub mod registry;
/// Persisted registry settings and their stores.
pub mod settings;

#[cfg(test)]
mod test_support;

pub use buffer::{BufferId, ContentType, OutputBuffer};
pub use config::Config;
pub use error::OutpaneError;
pub use registry::{BufferRegistry, RegistryEvent, RegistryListener, RegistryServices};
pub use settings::RegistrySettings;
