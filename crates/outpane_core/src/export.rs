//! Exporting pane text: filename suggestion, dialog filters, and collaborators.

use crate::constants::{EXPORT_FILENAME_PREFIX, TEXT_EXTENSION};
use crate::error::OutpaneError;
use std::fs;
use std::path::{Path, PathBuf};

/// Asks the user where to save a file.
pub trait SaveFilenamePicker {
    /// # Arguments
    /// - `suggested`: Default file name.
    /// - `extension`: Default extension without the dot.
    /// - `filter`: Dialog filter in `label|pattern|label|pattern` form.
    ///
    /// # Returns
    /// The chosen path, or `None` when the user cancelled.
    fn pick_save_filename(
        &mut self,
        suggested: &str,
        extension: &str,
        filter: &str,
    ) -> Option<PathBuf>;
}

/// Non-fatal, user-facing error reporting.
pub trait MessageSurface {
    fn show_error(&mut self, message: &str);
}

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No pane is active.
    Unavailable,
    /// The user dismissed the dialog.
    Cancelled,
    Saved(PathBuf),
    /// Writing failed; the message was already shown to the user.
    Failed(String),
}

/// One `label|pattern` pair from a dialog filter string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub label: String,
    /// Extensions without `*.`; `"*"` matches everything.
    pub extensions: Vec<String>,
}

/// Suggested export filename for a pane: `Output-<name without spaces>.txt`.
pub fn suggested_filename(pane_name: &str) -> String {
    let compact: String = pane_name.chars().filter(|ch| *ch != ' ').collect();
    format!("{}-{}.{}", EXPORT_FILENAME_PREFIX, compact, TEXT_EXTENSION)
}

/// Split a `label|pattern|label|pattern` filter string into pairs.
///
/// Patterns may list several globs separated by `;`.
///
/// # Errors
/// Returns [`OutpaneError::InvalidFilter`] when the string has an odd number
/// of segments or an empty pattern.
pub fn parse_filter(filter: &str) -> Result<Vec<FileFilter>, OutpaneError> {
    let parts: Vec<&str> = filter.split('|').collect();
    if parts.len() % 2 != 0 {
        return Err(OutpaneError::InvalidFilter(filter.to_string()));
    }
    parts
        .chunks(2)
        .map(|pair| {
            let extensions: Vec<String> = pair[1]
                .split(';')
                .map(str::trim)
                .filter(|glob| !glob.is_empty())
                .map(|glob| glob.strip_prefix("*.").unwrap_or(glob).to_string())
                .collect();
            if extensions.is_empty() {
                return Err(OutpaneError::InvalidFilter(filter.to_string()));
            }
            Ok(FileFilter {
                label: pair[0].trim().to_string(),
                extensions,
            })
        })
        .collect()
}

/// Write `text` to `path`, replacing any existing file.
///
/// # Errors
/// Propagates the underlying I/O error.
pub fn write_text(path: &Path, text: &str) -> Result<(), OutpaneError> {
    fs::write(path, text)?;
    Ok(())
}
