//! Settings for the picker controls.
//!
//! [`Settings`] holds the defaults every control is created with when it is
//! built through the registry, plus logging and template configuration.
//! Values are plain strings where the controls crate owns the enum (button
//! and picker positions); they are validated when the registry is
//! bootstrapped, not when settings are loaded.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default picker date format (`yyyy-mm-dd`).
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-mm-dd";

/// Default picker time format (`hh:ii`).
pub const DEFAULT_TIME_FORMAT: &str = "hh:ii";

/// Default two-letter picker language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Factory method names under which the three control kinds are registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodNames {
    /// Method creating a date picker.
    pub date: String,
    /// Method creating a date & time picker.
    pub date_time: String,
    /// Method creating a time picker.
    pub time: String,
}

impl Default for MethodNames {
    fn default() -> Self {
        Self {
            date: "addDatePicker".to_string(),
            date_time: "addDateTimePicker".to_string(),
            time: "addTimePicker".to_string(),
        }
    }
}

/// The complete set of picker settings.
///
/// # Examples
///
/// ```
/// use form_datetime_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.date_format, "yyyy-mm-dd");
/// assert_eq!(settings.language, "en");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,
    /// The log level filter (e.g. "info", "debug", "form_datetime=trace").
    pub log_level: String,

    // ── Control defaults ─────────────────────────────────────────────

    /// Picker date format used by date and date-time controls.
    pub date_format: String,
    /// Picker time format used by date-time and time controls.
    pub time_format: String,
    /// Two-letter language code passed to the client picker.
    pub language: String,
    /// First day of the week, 0 (Sunday) to 6 (Saturday).
    pub week_start: u8,
    /// Where the input-group buttons go: `left`, `right` or `none`.
    pub buttons_position: String,
    /// Where the picker pops up: `bottom-left` or `bottom-right`.
    pub picker_position: String,

    // ── Templates ────────────────────────────────────────────────────

    /// Directory searched for custom control templates.
    pub template_dir: Option<PathBuf>,

    // ── Registration ─────────────────────────────────────────────────

    /// Factory method names.
    pub methods: MethodNames,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            week_start: 1,
            buttons_position: "right".to_string(),
            picker_position: "bottom-right".to_string(),
            template_dir: None,
            methods: MethodNames::default(),
        }
    }
}
