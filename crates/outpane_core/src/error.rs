//! Application error types for the output-pane core.
use thiserror::Error;

/// Top-level error type for fallible core helpers.
#[derive(Error, Debug)]
pub enum OutpaneError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings format error: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    #[error("Invalid file filter: {0}")]
    InvalidFilter(String),
}
