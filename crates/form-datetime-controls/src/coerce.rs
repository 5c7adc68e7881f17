//! Coercion of raw input into canonical date-times.
//!
//! [`ValueCoercer`] turns any [`RawValue`] into an optional
//! [`NaiveDateTime`] using the control's [`HostPattern`]. The raw input is
//! returned next to the result so the control can keep it for display and
//! presence checks.

use chrono::{DateTime, NaiveDateTime, NaiveTime};

use form_datetime_core::{FormDateTimeError, FormDateTimeResult};

use crate::format::HostPattern;
use crate::value::RawValue;

/// The outcome of a successful coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced {
    /// The canonical value, `None` for empty input.
    pub value: Option<NaiveDateTime>,
    /// The input the value came from.
    pub raw: RawValue,
}

/// Coerces raw input under one pattern.
///
/// # Examples
///
/// ```
/// use form_datetime_controls::coerce::ValueCoercer;
/// use form_datetime_controls::format::{HostPattern, TokenSet};
/// use form_datetime_controls::value::RawValue;
///
/// let coercer = ValueCoercer::new(HostPattern::new("dd-mm-yyyy", TokenSet::Date));
/// let coerced = coercer.coerce(RawValue::from("25-12-2024")).unwrap();
/// assert_eq!(coerced.value.unwrap().to_string(), "2024-12-25 00:00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCoercer {
    pattern: HostPattern,
}

impl ValueCoercer {
    /// Creates a coercer for the given pattern.
    pub const fn new(pattern: HostPattern) -> Self {
        Self { pattern }
    }

    /// The pattern values are parsed and formatted with.
    pub const fn pattern(&self) -> &HostPattern {
        &self.pattern
    }

    /// Coerces `raw` into a canonical value.
    ///
    /// - canonical date-times are taken as they are;
    /// - dates and zoned date-times are formatted with the pattern and parsed
    ///   back, so they end up at the pattern's precision;
    /// - timestamps become the UTC wall-clock time of that instant;
    /// - empty input clears the value;
    /// - strings must match the pattern exactly.
    ///
    /// Every other shape fails with [`FormDateTimeError::InvalidInput`].
    pub fn coerce(&self, raw: RawValue) -> FormDateTimeResult<Coerced> {
        let value = match &raw {
            RawValue::DateTime(dt) => Some(*dt),
            RawValue::Date(date) => {
                Some(self.reparse(&date.and_time(NaiveTime::default()))?)
            }
            RawValue::Zoned(zoned) => Some(self.reparse(&zoned.naive_local())?),
            RawValue::Timestamp(ts) => Some(from_timestamp(*ts)?),
            r if r.is_empty() => None,
            RawValue::Text(s) => Some(self.pattern.parse(s)?),
            other => {
                return Err(FormDateTimeError::InvalidInput(format!(
                    "Unsupported {} value '{other}'",
                    other.kind()
                )))
            }
        };

        Ok(Coerced { value, raw })
    }

    /// Formats a canonical value with the pattern.
    pub fn format(&self, value: &NaiveDateTime) -> String {
        self.pattern.format(value)
    }

    fn reparse(&self, value: &NaiveDateTime) -> FormDateTimeResult<NaiveDateTime> {
        self.pattern.parse(&self.pattern.format(value))
    }
}

fn from_timestamp(ts: i64) -> FormDateTimeResult<NaiveDateTime> {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| {
            FormDateTimeError::InvalidInput(format!("Timestamp {ts} is out of range"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::TokenSet;
    use chrono::{FixedOffset, NaiveDate, TimeZone};

    fn date_coercer() -> ValueCoercer {
        ValueCoercer::new(HostPattern::new("yyyy-mm-dd", TokenSet::Date))
    }

    fn minute_coercer() -> ValueCoercer {
        ValueCoercer::new(HostPattern::new("yyyy-mm-dd hh:ii", TokenSet::DateTime))
    }

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_canonical_taken_as_is() {
        let value = dt(2024, 5, 6, 7, 8, 9);
        let coerced = date_coercer().coerce(value.into()).unwrap();
        assert_eq!(coerced.value, Some(value));
        assert_eq!(coerced.raw, RawValue::DateTime(value));
    }

    #[test]
    fn test_zoned_value_drops_precision_below_pattern() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let zoned = offset.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let coerced = minute_coercer().coerce(zoned.into()).unwrap();
        assert_eq!(coerced.value, Some(dt(2024, 5, 6, 7, 8, 0)));
        assert_eq!(coerced.raw, RawValue::Zoned(zoned));
    }

    #[test]
    fn test_naive_date_lands_at_midnight() {
        let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        let coerced = minute_coercer().coerce(date.into()).unwrap();
        assert_eq!(coerced.value, Some(dt(2020, 2, 29, 0, 0, 0)));
    }

    #[test]
    fn test_timestamp() {
        let coerced = date_coercer().coerce(RawValue::Timestamp(1_735_084_800)).unwrap();
        let value = coerced.value.unwrap();
        assert_eq!(value.and_utc().timestamp(), 1_735_084_800);
        assert_eq!(coerced.raw, RawValue::Timestamp(1_735_084_800));
    }

    #[test]
    fn test_timestamp_zero_is_not_empty() {
        let coerced = date_coercer().coerce(RawValue::Timestamp(0)).unwrap();
        assert_eq!(coerced.value, Some(dt(1970, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_timestamp_out_of_range() {
        let err = date_coercer().coerce(RawValue::Timestamp(i64::MAX)).unwrap_err();
        assert!(matches!(err, FormDateTimeError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_inputs_clear_value_and_keep_raw() {
        for raw in [RawValue::Empty, RawValue::from(""), RawValue::List(vec![])] {
            let coerced = date_coercer().coerce(raw.clone()).unwrap();
            assert_eq!(coerced.value, None);
            assert_eq!(coerced.raw, raw);
        }
    }

    #[test]
    fn test_string_parsed_strictly() {
        let coerced = date_coercer().coerce("2024-12-25".into()).unwrap();
        assert_eq!(coerced.value, Some(dt(2024, 12, 25, 0, 0, 0)));
        assert_eq!(coerced.raw, RawValue::from("2024-12-25"));

        assert!(date_coercer().coerce("25.12.2024".into()).is_err());
        assert!(date_coercer().coerce("2024-12-25x".into()).is_err());
        for padded in [" 2024-12-25", "2024- 12-25"] {
            let err = date_coercer().coerce(padded.into()).unwrap_err();
            assert!(matches!(err, FormDateTimeError::InvalidInput(_)), "{padded:?}");
        }
    }

    #[test]
    fn test_unsupported_shapes() {
        for raw in [
            RawValue::Float(1.5),
            RawValue::Bool(true),
            RawValue::List(vec!["2024-12-25".into()]),
        ] {
            let err = date_coercer().coerce(raw).unwrap_err();
            assert!(matches!(err, FormDateTimeError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(minute_coercer().format(&dt(2024, 1, 2, 3, 4, 5)), "2024-01-02 03:04");
    }
}
