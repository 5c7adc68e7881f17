//! Validation rules for picker controls.
//!
//! A [`Rule`] is registered on a [`DateTimeControl`] and evaluated by the
//! control's rule engine. The `validate_*` functions are the predicates
//! behind each rule; they accept any [`FormControl`] and fail with
//! [`FormDateTimeError::InvalidState`] when handed something other than a
//! picker.

use chrono::NaiveDateTime;
use serde::Serialize;

use form_datetime_core::{FormDateTimeError, FormDateTimeResult};

use crate::control::FormControl;
use crate::format::HostPattern;
use crate::picker::DateTimeControl;

/// A validation rule of a picker control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Something was entered (it does not have to be valid).
    Filled,
    /// Nothing was entered, or what was entered parsed.
    Valid,
    /// The value is not earlier than the bound.
    Min(NaiveDateTime),
    /// The value is not later than the bound.
    Max(NaiveDateTime),
    /// The value lies within the bounds; `None` leaves a side open.
    Range(Option<NaiveDateTime>, Option<NaiveDateTime>),
}

impl Rule {
    /// The operation name used when exporting rules to the client.
    pub const fn op(&self) -> &'static str {
        match self {
            Self::Filled => ":filled",
            Self::Valid => ":valid",
            Self::Min(_) => "dateTimeMin",
            Self::Max(_) => "dateTimeMax",
            Self::Range(..) => "dateTimeRange",
        }
    }

    /// The message used when the rule was registered without one.
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::Filled => "Please complete mandatory field.",
            Self::Valid => "Please enter a valid date.",
            Self::Min(_) => "Please enter a date no earlier than the allowed minimum.",
            Self::Max(_) => "Please enter a date no later than the allowed maximum.",
            Self::Range(..) => "Please enter a date within the allowed range.",
        }
    }

    /// Whether the rule runs even when nothing was entered.
    pub const fn applies_to_empty(&self) -> bool {
        matches!(self, Self::Filled)
    }

    /// Evaluates the rule against `control`.
    pub fn evaluate(&self, control: &dyn FormControl) -> FormDateTimeResult<bool> {
        match self {
            Self::Filled => validate_filled(control),
            Self::Valid => validate_valid(control),
            Self::Min(min) => validate_min(control, Some(min)),
            Self::Max(max) => validate_max(control, Some(max)),
            Self::Range(min, max) => validate_range(control, min.as_ref(), max.as_ref()),
        }
    }
}

/// A rule together with the message reported when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredRule {
    /// The rule.
    pub rule: Rule,
    /// The failure message.
    pub message: String,
}

impl RegisteredRule {
    /// Pairs a rule with a message, falling back to the rule's default.
    pub fn new(rule: Rule, message: Option<&str>) -> Self {
        let message = message.map_or_else(|| rule.default_message().to_string(), str::to_string);
        Self { rule, message }
    }
}

/// Orders the bounds of a range rule.
///
/// Both bounds must be given; they are swapped when reversed.
pub fn normalize_range(
    min: Option<NaiveDateTime>,
    max: Option<NaiveDateTime>,
) -> FormDateTimeResult<(NaiveDateTime, NaiveDateTime)> {
    match (min, max) {
        (Some(a), Some(b)) if a > b => Ok((b, a)),
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(FormDateTimeError::InvalidArgument(
            "Provided rule arguments are not valid. Date range rule expects min & max date-time values."
                .to_string(),
        )),
    }
}

fn as_picker(control: &dyn FormControl) -> FormDateTimeResult<&DateTimeControl> {
    control
        .as_any()
        .downcast_ref::<DateTimeControl>()
        .ok_or_else(|| {
            FormDateTimeError::InvalidState(format!(
                "Unable to validate {} instance '{}'.",
                control.control_type(),
                control.name()
            ))
        })
}

/// Did the user enter anything? The value does not have to be valid.
pub fn validate_filled(control: &dyn FormControl) -> FormDateTimeResult<bool> {
    Ok(!as_picker(control)?.raw_value().is_empty())
}

/// Is the entered value valid? An empty value is valid too.
pub fn validate_valid(control: &dyn FormControl) -> FormDateTimeResult<bool> {
    let picker = as_picker(control)?;
    Ok(picker.raw_value().is_empty() || picker.value().is_some())
}

/// Is the value not earlier than `min`?
pub fn validate_min(
    control: &dyn FormControl,
    min: Option<&NaiveDateTime>,
) -> FormDateTimeResult<bool> {
    validate_range(control, min, None)
}

/// Is the value not later than `max`?
pub fn validate_max(
    control: &dyn FormControl,
    max: Option<&NaiveDateTime>,
) -> FormDateTimeResult<bool> {
    validate_range(control, None, max)
}

/// Is the value within `min..=max`? A `None` bound does not constrain.
///
/// A control without a value fails unless both bounds are `None`.
pub fn validate_range(
    control: &dyn FormControl,
    min: Option<&NaiveDateTime>,
    max: Option<&NaiveDateTime>,
) -> FormDateTimeResult<bool> {
    let picker = as_picker(control)?;
    if min.is_none() && max.is_none() {
        return Ok(true);
    }
    Ok(picker.value().is_some_and(|value| {
        min.map_or(true, |min| value >= *min) && max.map_or(true, |max| value <= *max)
    }))
}

#[derive(Debug, Serialize)]
struct ExportedRule<'a> {
    op: &'static str,
    msg: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    arg: Option<serde_json::Value>,
}

/// Exports rules for the `data-nette-rules` attribute.
///
/// Bounds are formatted with `pattern`. Returns `None` when there are no
/// rules.
pub fn export_rules(rules: &[RegisteredRule], pattern: &HostPattern) -> Option<String> {
    if rules.is_empty() {
        return None;
    }
    let bound = |value: &Option<NaiveDateTime>| {
        value.map_or(serde_json::Value::Null, |v| pattern.format(&v).into())
    };
    let exported: Vec<ExportedRule<'_>> = rules
        .iter()
        .map(|registered| ExportedRule {
            op: registered.rule.op(),
            msg: &registered.message,
            arg: match &registered.rule {
                Rule::Filled | Rule::Valid => None,
                Rule::Min(v) | Rule::Max(v) => Some(pattern.format(v).into()),
                Rule::Range(min, max) => Some(serde_json::json!([bound(min), bound(max)])),
            },
        })
        .collect();
    serde_json::to_string(&exported).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::FieldKind;
    use crate::format::TokenSet;
    use crate::text::TextControl;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn picker_with(value: &str) -> DateTimeControl {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        control.set_value(value).unwrap();
        control
    }

    #[test]
    fn test_filled() {
        assert!(validate_filled(&picker_with("2024-01-01")).unwrap());
        assert!(!validate_filled(&picker_with("")).unwrap());
    }

    #[test]
    fn test_valid() {
        assert!(validate_valid(&picker_with("2024-01-01")).unwrap());
        assert!(validate_valid(&picker_with("")).unwrap());
    }

    #[test]
    fn test_min_max() {
        let control = picker_with("2024-06-15");
        assert!(validate_min(&control, Some(&date(2024, 6, 15))).unwrap());
        assert!(!validate_min(&control, Some(&date(2024, 6, 16))).unwrap());
        assert!(validate_max(&control, Some(&date(2024, 6, 15))).unwrap());
        assert!(!validate_max(&control, Some(&date(2024, 6, 14))).unwrap());
        assert!(validate_min(&control, None).unwrap());
    }

    #[test]
    fn test_range_open_sides() {
        let control = picker_with("2024-06-15");
        assert!(validate_range(&control, Some(&date(2024, 1, 1)), None).unwrap());
        assert!(validate_range(&control, None, Some(&date(2024, 12, 31))).unwrap());
        assert!(!validate_range(&control, Some(&date(2025, 1, 1)), None).unwrap());
    }

    #[test]
    fn test_range_without_value_fails() {
        let control = picker_with("");
        assert!(!validate_range(&control, Some(&date(2024, 1, 1)), None).unwrap());
        assert!(validate_range(&control, None, None).unwrap());
    }

    #[test]
    fn test_wrong_control_kind() {
        let text = TextControl::new("note", None);
        let err = validate_filled(&text).unwrap_err();
        assert!(matches!(err, FormDateTimeError::InvalidState(_)));
        assert!(Rule::Valid.evaluate(&text).is_err());
        assert!(validate_min(&text, None).is_err());
    }

    #[test]
    fn test_normalize_range() {
        let (a, b) = (date(2024, 1, 1), date(2024, 12, 31));
        assert_eq!(normalize_range(Some(b), Some(a)).unwrap(), (a, b));
        assert_eq!(normalize_range(Some(a), Some(b)).unwrap(), (a, b));
        assert!(matches!(
            normalize_range(Some(a), None).unwrap_err(),
            FormDateTimeError::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_registered_rule_default_message() {
        let rule = RegisteredRule::new(Rule::Filled, None);
        assert_eq!(rule.message, "Please complete mandatory field.");
        let rule = RegisteredRule::new(Rule::Valid, Some("Bad date"));
        assert_eq!(rule.message, "Bad date");
    }

    #[test]
    fn test_export_rules() {
        let pattern = HostPattern::new("dd.mm.yyyy", TokenSet::Date);
        assert_eq!(export_rules(&[], &pattern), None);

        let rules = vec![
            RegisteredRule::new(Rule::Filled, Some("Required")),
            RegisteredRule::new(Rule::Range(Some(date(2024, 1, 1)), None), Some("Out")),
        ];
        let json: serde_json::Value =
            serde_json::from_str(&export_rules(&rules, &pattern).unwrap()).unwrap();
        assert_eq!(json[0]["op"], ":filled");
        assert!(json[0].get("arg").is_none());
        assert_eq!(json[1]["op"], "dateTimeRange");
        assert_eq!(json[1]["arg"][0], "01.01.2024");
        assert!(json[1]["arg"][1].is_null());
    }
}
