//! Configuration loading from environment variables.

use crate::constants::SETTINGS_FILE_NAME;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the settings file location.
pub const SETTINGS_PATH_VAR: &str = "OUTPANE_SETTINGS_PATH";
/// Environment flag keeping settings in memory only.
pub const EPHEMERAL_SETTINGS_VAR: &str = "OUTPANE_EPHEMERAL_SETTINGS";

/// Runtime configuration for the output window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub settings_path: PathBuf,
    pub ephemeral_settings: bool,
}

fn expand_tilde(path: String, home: Option<PathBuf>) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn resolve_home_dir(lookup: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(home) = non_blank("HOME") {
        return Some(PathBuf::from(home));
    }

    // Windows USERPROFILE (standard)
    if let Some(profile) = non_blank("USERPROFILE") {
        return Some(PathBuf::from(profile));
    }

    if let (Some(drive), Some(path)) = (non_blank("HOMEDRIVE"), non_blank("HOMEPATH")) {
        return Some(PathBuf::from(format!("{}{}", drive, path)));
    }

    std::env::current_dir().ok()
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup`: Returns the raw value of a variable, or `None` when unset.
    ///
    /// # Returns
    /// A populated [`Config`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let home = resolve_home_dir(&lookup);
        let settings_path = match lookup(SETTINGS_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            Some(path) => expand_tilde(path, home),
            None => home
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".cache")
                .join("outpane")
                .join(SETTINGS_FILE_NAME),
        };
        Self {
            settings_path,
            ephemeral_settings: lookup(EPHEMERAL_SETTINGS_VAR)
                .and_then(|value| parse_env_flag(&value))
                .unwrap_or(false),
        }
    }
}
