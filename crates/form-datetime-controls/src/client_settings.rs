//! The option map handed to the client picker.
//!
//! The map has a `date` section for date and date-time controls and a `time`
//! section for date-time and time controls. Flags are the strings `"true"`
//! and `"false"`.

use serde_json::{json, Map, Value};

use crate::control::FieldKind;
use crate::format::HostPattern;
use crate::options::{js_bool, View};
use crate::picker::DateTimeControl;

/// Builds the settings map of `control`.
pub fn build(control: &DateTimeControl) -> Value {
    let full = control.full_pattern();
    let initial = control.value().map(|v| full.format(&v));

    let mut settings = Map::new();
    match control.kind() {
        FieldKind::Date => {
            settings.insert("date".into(), date_section(control, full, initial).into());
        }
        FieldKind::DateTime => {
            settings.insert("date".into(), date_section(control, full, initial).into());
            settings.insert("time".into(), time_section(control, full, None).into());
        }
        FieldKind::Time => {
            settings.insert("time".into(), time_section(control, full, initial).into());
        }
    }
    Value::Object(settings)
}

fn date_section(
    control: &DateTimeControl,
    full: &HostPattern,
    initial: Option<String>,
) -> Map<String, Value> {
    let options = control.options();
    let mut section = object(json!({
        "format": control.date_format(),
        "weekStart": options.week_start,
        "autoclose": js_bool(options.autoclose),
        "startView": options.start_view.as_str(),
        "minView": options.min_view.as_str(),
        "maxView": options.max_view.as_str(),
        "todayBtn": options.today_button.as_str(),
        "todayHighlight": js_bool(options.today_highlight),
        "keyboardNavigation": js_bool(options.keyboard_navigation),
        "language": options.language,
        "forceParse": js_bool(options.force_parse),
        "pickerPosition": options.picker_position.as_str(),
    }));

    if let Some(lower) = control.lower_bound() {
        let lower = full.format(&lower);
        section.insert("minDate".into(), lower.clone().into());
        section.insert("startDate".into(), lower.into());
    }
    if let Some(upper) = control.upper_bound() {
        let upper = full.format(&upper);
        section.insert("endDate".into(), upper.clone().into());
        section.insert("maxDate".into(), upper.into());
    }
    if let Some(days) = &options.days_of_week_disabled {
        let joined = days.iter().map(u8::to_string).collect::<Vec<_>>().join(",");
        section.insert("daysOfWeekDisabled".into(), joined.into());
    }
    if let Some(initial) = initial {
        section.insert("initialDate".into(), initial.into());
    }
    section
}

fn time_section(
    control: &DateTimeControl,
    full: &HostPattern,
    initial: Option<String>,
) -> Map<String, Value> {
    let options = control.options();
    let mut section = object(json!({
        "format": control.time_format(),
        "showMeridian": js_bool(options.show_meridian),
        "autoclose": js_bool(options.autoclose),
        "startView": View::Day.as_str(),
        "minView": View::Hour.as_str(),
        "maxView": View::Day.as_str(),
        "viewSelect": View::Hour.as_str(),
        "keyboardNavigation": js_bool(options.keyboard_navigation),
        "language": options.language,
        "forceParse": js_bool(options.force_parse),
    }));

    if let Some(lower) = control.lower_bound() {
        section.insert("startDate".into(), full.format(&lower).into());
    }
    if let Some(upper) = control.upper_bound() {
        section.insert("endDate".into(), full.format(&upper).into());
    }
    if let Some(initial) = initial {
        section.insert("initialDate".into(), initial.into());
    }
    section
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
