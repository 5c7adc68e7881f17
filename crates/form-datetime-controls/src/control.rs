//! The control abstraction shared by everything a [`Form`](crate::form::Form)
//! holds, and the kinds of picker controls.

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use form_datetime_core::{FormData, FormDateTimeError, FormDateTimeResult};

use crate::format::TokenSet;

/// A form control: something that loads submitted data, validates itself and
/// renders HTML.
///
/// All controls must be `Send + Sync` so a built form can move between
/// threads.
pub trait FormControl: Send + Sync + fmt::Debug {
    /// The control's HTML name.
    fn name(&self) -> &str;

    /// A short name of the concrete control type, used in error messages.
    fn control_type(&self) -> &'static str;

    /// Loads this control's value from submitted data. Never fails: values
    /// that cannot be interpreted leave the control without a value.
    fn load_http_data(&mut self, data: &FormData);

    /// Returns `true` if anything was entered.
    fn is_filled(&self) -> bool;

    /// Runs the registered rules and stores the failure messages.
    ///
    /// Returns `Ok(true)` when every rule passed.
    fn validate(&mut self) -> FormDateTimeResult<bool>;

    /// The messages of the rules that failed in the last validation.
    fn errors(&self) -> &[String];

    /// Renders the control as HTML.
    fn render(&self) -> FormDateTimeResult<String>;

    /// Upcasts to [`Any`] for downcasting to the concrete control.
    fn as_any(&self) -> &dyn Any;

    /// Upcasts to [`Any`] for mutable downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// One input of a picker control, submitted as `name[part]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The date input.
    Date,
    /// The time input.
    Time,
}

impl Part {
    /// The key inside the brackets.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Part {
    type Err = FormDateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            _ => Err(FormDateTimeError::InvalidArgument(format!(
                "Part '{s}' does not exist"
            ))),
        }
    }
}

/// The three picker controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A calendar date.
    Date,
    /// A calendar date and a time of day, entered in two inputs.
    DateTime,
    /// A time of day.
    Time,
}

impl FieldKind {
    /// The token vocabulary of the control's full format.
    pub const fn token_set(self) -> TokenSet {
        match self {
            Self::Date => TokenSet::Date,
            Self::DateTime => TokenSet::DateTime,
            Self::Time => TokenSet::Time,
        }
    }

    /// The inputs the control renders and reads.
    pub const fn parts(self) -> &'static [Part] {
        match self {
            Self::Date => &[Part::Date],
            Self::DateTime => &[Part::Date, Part::Time],
            Self::Time => &[Part::Time],
        }
    }

    /// Returns `true` if the control has the given input.
    pub fn has_part(self, part: Part) -> bool {
        self.parts().contains(&part)
    }

    /// A human-readable name, used in log and error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "Date picker",
            Self::DateTime => "Date & time picker",
            Self::Time => "Time picker",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
