//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `FORM_DATETIME_DEBUG` | `debug` |
//! | `FORM_DATETIME_LOG_LEVEL` | `log_level` |
//! | `FORM_DATETIME_DATE_FORMAT` | `date_format` |
//! | `FORM_DATETIME_TIME_FORMAT` | `time_format` |
//! | `FORM_DATETIME_LANGUAGE` | `language` |
//! | `FORM_DATETIME_WEEK_START` | `week_start` |
//! | `FORM_DATETIME_BUTTONS_POSITION` | `buttons_position` |
//! | `FORM_DATETIME_PICKER_POSITION` | `picker_position` |
//! | `FORM_DATETIME_TEMPLATE_DIR` | `template_dir` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use form_datetime_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("config/pickers.toml").unwrap();
//! ```

use std::path::{Path, PathBuf};

use crate::error::FormDateTimeError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Keys missing from the TOML keep their default values.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, FormDateTimeError> {
    // Tables and scalars map one to one onto JSON; settings hold no datetimes.
    let value: serde_json::Value = toml::from_str(toml_str).map_err(|e| {
        FormDateTimeError::ConfigurationError(format!("Failed to parse TOML: {e}"))
    })?;
    merge_over_defaults(value, "TOML")
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, FormDateTimeError> {
    from_toml_str(&read_config(path.as_ref(), "TOML")?)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, FormDateTimeError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
pub fn from_json_str(json_str: &str) -> Result<Settings, FormDateTimeError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str).map_err(|e| {
        FormDateTimeError::ConfigurationError(format!("Failed to parse JSON: {e}"))
    })?;
    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, FormDateTimeError> {
    from_json_str(&read_config(path.as_ref(), "JSON")?)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies `FORM_DATETIME_*` environment variable overrides.
///
/// Unparseable numeric values are ignored.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("FORM_DATETIME_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("FORM_DATETIME_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("FORM_DATETIME_DATE_FORMAT") {
        settings.date_format = val;
    }

    if let Ok(val) = std::env::var("FORM_DATETIME_TIME_FORMAT") {
        settings.time_format = val;
    }

    if let Ok(val) = std::env::var("FORM_DATETIME_LANGUAGE") {
        settings.language = val;
    }

    if let Ok(val) = std::env::var("FORM_DATETIME_WEEK_START") {
        if let Ok(day) = val.parse::<u8>() {
            settings.week_start = day;
        }
    }

    if let Ok(val) = std::env::var("FORM_DATETIME_BUTTONS_POSITION") {
        settings.buttons_position = val;
    }

    if let Ok(val) = std::env::var("FORM_DATETIME_PICKER_POSITION") {
        settings.picker_position = val;
    }

    if let Ok(val) = std::env::var("FORM_DATETIME_TEMPLATE_DIR") {
        settings.template_dir = Some(PathBuf::from(val));
    }
}

// ============================================================
// Helpers
// ============================================================

fn read_config(path: &Path, kind: &str) -> Result<String, FormDateTimeError> {
    std::fs::read_to_string(path).map_err(|e| {
        FormDateTimeError::ConfigurationError(format!(
            "Failed to read {kind} file '{}': {e}",
            path.display()
        ))
    })
}

fn merge_over_defaults(
    value: serde_json::Value,
    kind: &str,
) -> Result<Settings, FormDateTimeError> {
    let mut merged = serde_json::to_value(Settings::default()).map_err(|e| {
        FormDateTimeError::ConfigurationError(format!(
            "Failed to serialize default settings: {e}"
        ))
    })?;

    overlay(&mut merged, value);
    serde_json::from_value(merged).map_err(|e| {
        FormDateTimeError::ConfigurationError(format!(
            "Failed to deserialize settings from {kind}: {e}"
        ))
    })
}

/// Writes `patch` over `base`, descending into objects present in both.
fn overlay(base: &mut serde_json::Value, patch: serde_json::Value) {
    let serde_json::Value::Object(patch_map) = patch else {
        *base = patch;
        return;
    };
    match base {
        serde_json::Value::Object(base_map) => {
            for (key, value) in patch_map {
                match base_map.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        _ => *base = serde_json::Value::Object(patch_map),
    }
}
