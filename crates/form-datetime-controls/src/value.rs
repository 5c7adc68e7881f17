//! Raw values handed to a picker control.
//!
//! A control accepts several shapes of input: canonical date-times, other
//! chrono values, Unix timestamps, submitted strings and empty values.
//! [`RawValue`] names each shape so coercion can dispatch on it once.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// The original, unconverted input of a control.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RawValue {
    /// Nothing was set or submitted.
    #[default]
    Empty,
    /// A string, usually submitted form data.
    Text(String),
    /// A list of strings (repeated form keys).
    List(Vec<String>),
    /// Seconds since the Unix epoch.
    Timestamp(i64),
    /// An already-canonical value.
    DateTime(NaiveDateTime),
    /// A calendar date without time of day.
    Date(NaiveDate),
    /// A date-time with a UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// A floating point number. Never accepted.
    Float(f64),
    /// A boolean. Never accepted.
    Bool(bool),
}

impl RawValue {
    /// Returns `true` for [`Empty`](Self::Empty), an empty string and an
    /// empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// A short name of the shape, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Text(_) => "string",
            Self::List(_) => "list",
            Self::Timestamp(_) => "timestamp",
            Self::DateTime(_) => "date-time",
            Self::Date(_) => "date",
            Self::Zoned(_) => "zoned date-time",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(",")),
            Self::Timestamp(ts) => write!(f, "{ts}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<i64> for RawValue {
    fn from(ts: i64) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<NaiveDate> for RawValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<DateTime<FixedOffset>> for RawValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Zoned(dt)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Self>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}
