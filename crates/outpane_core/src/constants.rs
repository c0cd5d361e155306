//! Shared constants used across outpane crates.

use uuid::Uuid;

/// Prefix of the suggested export filename (`Output-<name>.txt`).
pub const EXPORT_FILENAME_PREFIX: &str = "Output";

/// Extension handed to the save dialog for exported pane text.
pub const TEXT_EXTENSION: &str = "txt";

/// Filter string offered to the save dialog, in `label|pattern|label|pattern` form.
pub const TEXT_FILES_FILTER: &str = "Text files (*.txt)|*.txt|All files (*.*)|*.*";

/// Context-menu id attached to every log editor created for an output pane.
pub const LOG_TEXT_EDITOR_MENU_ID: Uuid =
    Uuid::from_u128(0x2d2b_7d1c_6f0e_4c59_9a3b_1e5c_8f40_a7d2);

/// Text view role tagging surfaces created by the registry.
pub const OUTPUT_TEXT_PANE_ROLE: &str = "OutputTextPane";

/// Appearance category applied to output pane editors.
pub const OUTPUT_APPEARANCE_CATEGORY: &str = "Output";

/// Zoom level reported when no pane is active.
pub const DEFAULT_ZOOM_LEVEL: f64 = 100.0;

/// Zoom bounds, in percent.
pub const MIN_ZOOM_LEVEL: f64 = 20.0;
pub const MAX_ZOOM_LEVEL: f64 = 400.0;

/// Percent added or removed by one zoom in/out step.
pub const ZOOM_STEP: f64 = 10.0;

/// Default settings file name inside the cache directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Content type used for plain text panes.
pub const PLAIN_TEXT_CONTENT_TYPE: &str = "text";
