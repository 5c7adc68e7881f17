//! Picker options and their string forms.
//!
//! Every option that reaches the client picker as a string has a
//! [`FromStr`] implementation, so configuration loaded from settings files is
//! validated when the control is set up.

use std::fmt;
use std::str::FromStr;

use form_datetime_core::settings::DEFAULT_LANGUAGE;
use form_datetime_core::FormDateTimeError;

use crate::control::FieldKind;

/// Where the input-group buttons are placed around the text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonsPosition {
    /// Buttons before the input.
    Left,
    /// Buttons after the input.
    #[default]
    Right,
    /// No buttons.
    None,
}

impl ButtonsPosition {
    /// Whether buttons are rendered at all.
    pub const fn shows_buttons(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// The template placement: `before`, `after` or `none`.
    pub const fn placement(self) -> &'static str {
        match self {
            Self::Left => "before",
            Self::Right => "after",
            Self::None => "none",
        }
    }
}

impl FromStr for ButtonsPosition {
    type Err = FormDateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "none" => Ok(Self::None),
            _ => Err(FormDateTimeError::InvalidArgument(format!(
                "Invalid buttons position given: '{s}'"
            ))),
        }
    }
}

/// Where the picker pops up relative to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerPosition {
    /// `bottom-left`.
    BottomLeft,
    /// `bottom-right`.
    #[default]
    BottomRight,
}

impl PickerPosition {
    /// The client-side name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for PickerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PickerPosition {
    type Err = FormDateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-right" => Ok(Self::BottomRight),
            _ => Err(FormDateTimeError::InvalidArgument(format!(
                "Invalid picker position given: '{s}'"
            ))),
        }
    }
}

/// A calendar view of the picker, from the finest to the coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum View {
    /// Minutes of one hour.
    Hour,
    /// Hours of one day.
    Day,
    /// Days of one month.
    Month,
    /// Months of one year.
    Year,
    /// Years of one decade.
    Decade,
}

impl View {
    /// The client-side name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
            Self::Decade => "decade",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = FormDateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "decade" => Ok(Self::Decade),
            _ => Err(FormDateTimeError::InvalidArgument(format!(
                "Invalid calendar view given: '{s}'"
            ))),
        }
    }
}

/// The "Today" button of the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodayButton {
    /// No button.
    #[default]
    Off,
    /// A button scrolling the calendar to today.
    On,
    /// A button scrolling to today and selecting it.
    Linked,
}

impl TodayButton {
    /// The client-side value: `false`, `true` or `linked`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "false",
            Self::On => "true",
            Self::Linked => "linked",
        }
    }
}

impl FromStr for TodayButton {
    type Err = FormDateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "false" | "off" => Ok(Self::Off),
            "true" | "on" => Ok(Self::On),
            "linked" => Ok(Self::Linked),
            _ => Err(FormDateTimeError::InvalidArgument(format!(
                "Invalid today button mode given: '{s}'"
            ))),
        }
    }
}

/// Validates and normalizes a two-letter language code.
///
/// # Examples
///
/// ```
/// use form_datetime_controls::options::language_code;
///
/// assert_eq!(language_code("CS").unwrap(), "cs");
/// assert!(language_code("en-us").is_err());
/// ```
pub fn language_code(language: &str) -> Result<String, FormDateTimeError> {
    if language.chars().count() != 2 {
        return Err(FormDateTimeError::InvalidArgument(format!(
            "Language code could be only 2 chars long, got '{language}'"
        )));
    }
    Ok(language.to_lowercase())
}

/// Serializes a flag the way the client picker expects it.
pub const fn js_bool(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

/// Client picker options of one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    /// First day of the week, 0 (Sunday) to 6 (Saturday).
    pub week_start: u8,
    /// Days of the week that cannot be picked, 0 (Sunday) to 6 (Saturday).
    pub days_of_week_disabled: Option<Vec<u8>>,
    /// The view shown when the picker opens.
    pub start_view: View,
    /// The finest view the picker shows.
    pub min_view: View,
    /// The coarsest view the picker shows.
    pub max_view: View,
    /// The "Today" button mode.
    pub today_button: TodayButton,
    /// Whether today is highlighted.
    pub today_highlight: bool,
    /// Where the picker pops up.
    pub picker_position: PickerPosition,
    /// Whether the picker closes as soon as a value is picked.
    pub autoclose: bool,
    /// Whether the keyboard navigates the picker.
    pub keyboard_navigation: bool,
    /// Whether the input is reformatted when the picker closes.
    pub force_parse: bool,
    /// Whether the time picker shows `am`/`pm`.
    pub show_meridian: bool,
    /// Two-letter language code, lowercase.
    pub language: String,
    /// Where the input-group buttons go.
    pub buttons_position: ButtonsPosition,
    /// Whether the button opening the picker is shown.
    pub trigger_button: bool,
    /// Whether the button clearing the value is shown.
    pub cancel_button: bool,
}

impl PickerOptions {
    /// The defaults of a control kind. Date-time controls can pick down to
    /// the hour.
    pub fn for_kind(kind: FieldKind) -> Self {
        Self {
            week_start: 1,
            days_of_week_disabled: None,
            start_view: View::Month,
            min_view: match kind {
                FieldKind::DateTime => View::Hour,
                FieldKind::Date | FieldKind::Time => View::Month,
            },
            max_view: View::Decade,
            today_button: TodayButton::Off,
            today_highlight: true,
            picker_position: PickerPosition::BottomRight,
            autoclose: true,
            keyboard_navigation: true,
            force_parse: true,
            show_meridian: false,
            language: DEFAULT_LANGUAGE.to_string(),
            buttons_position: ButtonsPosition::Right,
            trigger_button: false,
            cancel_button: false,
        }
    }
}

/// Checks a day-of-week number, 0 (Sunday) to 6 (Saturday).
pub fn weekday(day: u8) -> Result<u8, FormDateTimeError> {
    if day > 6 {
        return Err(FormDateTimeError::InvalidArgument(format!(
            "Day of week must be between 0 (Sunday) and 6 (Saturday), got {day}"
        )));
    }
    Ok(day)
}
