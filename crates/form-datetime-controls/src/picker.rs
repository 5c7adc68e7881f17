//! The picker control.
//!
//! One [`DateTimeControl`] type serves all three kinds of picker. The kind
//! decides which inputs are rendered (`name[date]`, `name[time]` or both),
//! which token vocabulary the formats use and how the settings map for the
//! client picker is laid out.
//!
//! A control keeps two values: the canonical [`NaiveDateTime`] produced by
//! the [`ValueCoercer`], and the [`RawValue`] it came from. Rules read the
//! raw value to tell "nothing entered" from "entered but invalid".

use std::any::Any;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use form_datetime_core::form_data::part_key;
use form_datetime_core::logging::control_span;
use form_datetime_core::{FormData, FormDateTimeError, FormDateTimeResult};

use crate::client_settings;
use crate::coerce::{Coerced, ValueCoercer};
use crate::control::{FieldKind, FormControl, Part};
use crate::format::{merge_formats, HostPattern, TokenSet};
use crate::html::Html;
use crate::options::{
    language_code, weekday, ButtonsPosition, PickerOptions, PickerPosition, TodayButton, View,
};
use crate::registry::ControlDefaults;
use crate::render;
use crate::rules::{export_rules, normalize_range, RegisteredRule, Rule};
use crate::value::RawValue;

/// A date, date-time or time picker.
///
/// # Examples
///
/// ```
/// use form_datetime_controls::control::FieldKind;
/// use form_datetime_controls::picker::DateTimeControl;
///
/// let mut control = DateTimeControl::new(FieldKind::Date, "birthday", Some("Birthday"));
/// control.set_date_format("dd.mm.yyyy");
/// control.set_value("24.12.1990").unwrap();
/// assert_eq!(control.value().unwrap().to_string(), "1990-12-24 00:00:00");
/// ```
#[derive(Debug, Clone)]
pub struct DateTimeControl {
    name: String,
    kind: FieldKind,
    caption: Option<String>,
    date_format: String,
    time_format: String,
    coercer: ValueCoercer,
    value: Option<NaiveDateTime>,
    raw_value: RawValue,
    options: PickerOptions,
    lower_bound: Option<NaiveDateTime>,
    upper_bound: Option<NaiveDateTime>,
    rules: Vec<RegisteredRule>,
    required: bool,
    disabled: bool,
    template_path: Option<PathBuf>,
    template_dir: Option<PathBuf>,
    errors: Vec<String>,
}

impl DateTimeControl {
    /// Creates a control with the built-in defaults.
    pub fn new(kind: FieldKind, name: impl Into<String>, label: Option<&str>) -> Self {
        Self::with_defaults(kind, name, label, &ControlDefaults::default())
    }

    /// Creates a control with the given defaults.
    pub fn with_defaults(
        kind: FieldKind,
        name: impl Into<String>,
        label: Option<&str>,
        defaults: &ControlDefaults,
    ) -> Self {
        let mut options = PickerOptions::for_kind(kind);
        options.week_start = defaults.week_start;
        options.language.clone_from(&defaults.language);
        options.buttons_position = defaults.buttons_position;
        options.picker_position = defaults.picker_position;

        let date_format = defaults.date_format.clone();
        let time_format = defaults.time_format.clone();
        let coercer = ValueCoercer::new(HostPattern::new(
            full_format(kind, &date_format, &time_format),
            kind.token_set(),
        ));

        Self {
            name: name.into(),
            kind,
            caption: label.map(str::to_string),
            date_format,
            time_format,
            coercer,
            value: None,
            raw_value: RawValue::Empty,
            options,
            lower_bound: None,
            upper_bound: None,
            rules: Vec::new(),
            required: false,
            disabled: false,
            template_path: None,
            template_dir: defaults.template_dir.clone(),
            errors: Vec::new(),
        }
    }

    // ── Value ────────────────────────────────────────────────────────

    /// Sets the value from any supported input shape.
    ///
    /// On error the control is left unchanged.
    pub fn set_value(&mut self, raw: impl Into<RawValue>) -> FormDateTimeResult<&mut Self> {
        let Coerced { value, raw } = self.coercer.coerce(raw.into())?;
        self.value = value;
        self.raw_value = raw;
        Ok(self)
    }

    /// The canonical value, `None` when empty or invalid.
    pub const fn value(&self) -> Option<NaiveDateTime> {
        self.value
    }

    /// The input the value was set from.
    pub const fn raw_value(&self) -> &RawValue {
        &self.raw_value
    }

    /// Returns `true` if anything was entered, valid or not.
    pub fn is_filled(&self) -> bool {
        !self.raw_value.is_empty()
    }

    /// Reads the submitted string for this control.
    ///
    /// Date-time controls merge their two parts with one space. A composite
    /// submission missing either part counts as empty.
    fn submitted(&self, data: &FormData) -> RawValue {
        let field = |part: Part| {
            data.get_part(&self.name, part.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        match self.kind {
            FieldKind::Date => RawValue::from(field(Part::Date).unwrap_or_default()),
            FieldKind::Time => RawValue::from(field(Part::Time).unwrap_or_default()),
            FieldKind::DateTime => match (field(Part::Date), field(Part::Time)) {
                (Some(date), Some(time)) => RawValue::Text(merge_formats(date, time)),
                (None, None) => RawValue::Empty,
                (date, time) => {
                    debug!(
                        has_date = date.is_some(),
                        has_time = time.is_some(),
                        "incomplete date & time submission treated as empty"
                    );
                    RawValue::Empty
                }
            },
        }
    }

    // ── Rules ────────────────────────────────────────────────────────

    /// Registers a validation rule.
    ///
    /// Bound rules also set the bounds shown by the client picker. A range
    /// needs both bounds and is stored in ascending order.
    pub fn add_rule(&mut self, rule: Rule, message: Option<&str>) -> FormDateTimeResult<&mut Self> {
        let rule = match rule {
            Rule::Range(min, max) => {
                let (min, max) = normalize_range(min, max).map_err(|e| {
                    warn!(control = %self.name, error = %e, "range rule rejected");
                    e
                })?;
                self.lower_bound = Some(min);
                self.upper_bound = Some(max);
                Rule::Range(Some(min), Some(max))
            }
            Rule::Min(min) => {
                self.lower_bound = Some(min);
                Rule::Min(min)
            }
            Rule::Max(max) => {
                self.upper_bound = Some(max);
                Rule::Max(max)
            }
            other => other,
        };
        self.rules.push(RegisteredRule::new(rule, message));
        Ok(self)
    }

    /// Makes the control mandatory.
    pub fn set_required(&mut self, message: Option<&str>) -> &mut Self {
        if !self.required {
            self.required = true;
            self.rules.push(RegisteredRule::new(Rule::Filled, message));
        }
        self
    }

    /// The registered rules, in registration order.
    pub fn rules(&self) -> &[RegisteredRule] {
        &self.rules
    }

    /// The lower bound shown by the client picker.
    pub const fn lower_bound(&self) -> Option<NaiveDateTime> {
        self.lower_bound
    }

    /// The upper bound shown by the client picker.
    pub const fn upper_bound(&self) -> Option<NaiveDateTime> {
        self.upper_bound
    }

    // ── Configuration ────────────────────────────────────────────────

    /// Sets the picker date format, e.g. `dd.mm.yyyy`.
    pub fn set_date_format(&mut self, format: &str) -> &mut Self {
        self.date_format = format.to_string();
        self.rebuild_pattern();
        self
    }

    /// Sets the picker time format, e.g. `hh:ii`.
    pub fn set_time_format(&mut self, format: &str) -> &mut Self {
        self.time_format = format.to_string();
        self.rebuild_pattern();
        self
    }

    /// Shows `am`/`pm` in the time picker, adding ` P` to the time format
    /// when it has no meridian marker yet.
    ///
    /// The hour token stays 24-hour: `21:30 PM` parses, `09:30 PM` does not.
    pub fn set_show_meridian(&mut self, show: bool) -> &mut Self {
        self.options.show_meridian = show;
        if show && !self.time_format.contains(['p', 'P']) {
            self.time_format.push_str(" P");
            self.rebuild_pattern();
        }
        self
    }

    /// Sets the first day of the week, 0 (Sunday) to 6 (Saturday).
    pub fn set_week_start(&mut self, day: u8) -> FormDateTimeResult<&mut Self> {
        self.options.week_start = weekday(day)?;
        Ok(self)
    }

    /// Sets the days of the week that cannot be picked.
    pub fn set_days_of_week_disabled(&mut self, days: &[u8]) -> FormDateTimeResult<&mut Self> {
        let days = days
            .iter()
            .map(|day| weekday(*day))
            .collect::<FormDateTimeResult<Vec<_>>>()?;
        self.options.days_of_week_disabled = Some(days);
        Ok(self)
    }

    /// Sets the view shown when the picker opens.
    pub fn set_start_view(&mut self, view: View) -> &mut Self {
        self.options.start_view = view;
        self
    }

    /// Sets the finest view.
    pub fn set_min_view(&mut self, view: View) -> &mut Self {
        self.options.min_view = view;
        self
    }

    /// Sets the coarsest view.
    pub fn set_max_view(&mut self, view: View) -> &mut Self {
        self.options.max_view = view;
        self
    }

    /// Sets the "Today" button mode.
    pub fn set_today_button(&mut self, mode: TodayButton) -> &mut Self {
        self.options.today_button = mode;
        self
    }

    /// Highlights today's date in the calendar.
    pub fn set_today_highlight(&mut self, highlight: bool) -> &mut Self {
        self.options.today_highlight = highlight;
        self
    }

    /// Sets where the dropdown opens relative to the input.
    pub fn set_picker_position(&mut self, position: PickerPosition) -> &mut Self {
        self.options.picker_position = position;
        self
    }

    /// Closes the picker once a value is chosen.
    pub fn set_autoclose(&mut self, autoclose: bool) -> &mut Self {
        self.options.autoclose = autoclose;
        self
    }

    /// Allows moving through the calendar with the arrow keys.
    pub fn set_keyboard_navigation(&mut self, enabled: bool) -> &mut Self {
        self.options.keyboard_navigation = enabled;
        self
    }

    /// Makes the client reformat typed input to the picker format.
    pub fn set_force_parse(&mut self, force: bool) -> &mut Self {
        self.options.force_parse = force;
        self
    }

    /// Places the trigger and cancel buttons left or right of the inputs, or hides them.
    pub fn set_buttons_position(&mut self, position: ButtonsPosition) -> &mut Self {
        self.options.buttons_position = position;
        self
    }

    /// Shows a button that opens the picker.
    pub fn enable_trigger_button(&mut self) -> &mut Self {
        self.options.trigger_button = true;
        self
    }

    /// Shows a button that clears the value.
    pub fn enable_cancel_button(&mut self) -> &mut Self {
        self.options.cancel_button = true;
        self
    }

    /// Sets the two-letter language code of the client picker.
    pub fn set_language(&mut self, language: &str) -> FormDateTimeResult<&mut Self> {
        self.options.language = language_code(language)?;
        Ok(self)
    }

    /// Renders the inputs as `disabled`.
    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.disabled = disabled;
        self
    }

    /// Sets the label shown next to the inputs.
    pub fn set_caption(&mut self, caption: &str) -> &mut Self {
        self.caption = Some(caption.to_string());
        self
    }

    /// Uses a custom template for [`render`](FormControl::render).
    ///
    /// `path` is tried as given, then inside the configured template
    /// directory, then among the bundled templates.
    pub fn set_template_file(&mut self, path: impl AsRef<Path>) -> FormDateTimeResult<&mut Self> {
        let resolved = render::resolve_template(path.as_ref(), self.template_dir.as_deref())?;
        self.template_path = Some(resolved);
        Ok(self)
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    pub const fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn template_path(&self) -> Option<&Path> {
        self.template_path.as_deref()
    }

    /// The pattern of the whole value: the date format, the time format, or
    /// both joined with a space.
    pub const fn full_pattern(&self) -> &HostPattern {
        self.coercer.pattern()
    }

    /// The pattern of the date input.
    pub fn date_pattern(&self) -> HostPattern {
        HostPattern::new(self.date_format.as_str(), TokenSet::Date)
    }

    /// The pattern of the time input.
    pub fn time_pattern(&self) -> HostPattern {
        HostPattern::new(self.time_format.as_str(), TokenSet::Time)
    }

    /// Whether input-group buttons are rendered.
    pub const fn show_buttons(&self) -> bool {
        self.options.buttons_position.shows_buttons()
    }

    /// Where the buttons go: `before`, `after` or `none`.
    pub const fn buttons_position(&self) -> &'static str {
        self.options.buttons_position.placement()
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Renders one input of the control.
    ///
    /// `key` is `date` or `time`; a key the control kind does not have fails
    /// with [`FormDateTimeError::InvalidArgument`].
    pub fn control_part(&self, key: &str) -> FormDateTimeResult<Html> {
        let part: Part = key.parse()?;
        if !self.kind.has_part(part) {
            return Err(FormDateTimeError::InvalidArgument(format!(
                "Part '{key}' does not exist"
            )));
        }

        let pattern = match part {
            Part::Date => self.date_pattern(),
            Part::Time => self.time_pattern(),
        };

        Ok(Html::el("input")
            .attr("name", part_key(&self.name, part.as_str()))
            .attr("type", "text")
            .attr_opt("value", self.value.map(|v| pattern.format(&v)))
            .flag("required", self.required)
            .flag("disabled", self.disabled)
            .attr_opt("data-nette-rules", export_rules(&self.rules, self.full_pattern())))
    }

    /// The option map handed to the client picker.
    pub fn settings(&self) -> serde_json::Value {
        client_settings::build(self)
    }

    fn rebuild_pattern(&mut self) {
        self.coercer = ValueCoercer::new(HostPattern::new(
            full_format(self.kind, &self.date_format, &self.time_format),
            self.kind.token_set(),
        ));
    }
}

fn full_format(kind: FieldKind, date_format: &str, time_format: &str) -> String {
    match kind {
        FieldKind::Date => date_format.to_string(),
        FieldKind::Time => time_format.to_string(),
        FieldKind::DateTime => merge_formats(date_format, time_format),
    }
}

impl FormControl for DateTimeControl {
    fn name(&self) -> &str {
        &self.name
    }

    fn control_type(&self) -> &'static str {
        self.kind.label()
    }

    fn load_http_data(&mut self, data: &FormData) {
        let _guard = control_span(&self.name).entered();
        let raw = self.submitted(data);

        match self.coercer.coerce(raw.clone()) {
            Ok(Coerced { value, raw }) => {
                self.value = value;
                self.raw_value = raw;
            }
            Err(err) => {
                if err.is_user_error() {
                    debug!(error = %err, "submitted value could not be parsed");
                } else {
                    warn!(error = %err, "submitted value was not coerced");
                }
                self.value = None;
                self.raw_value = raw;
            }
        }
    }

    fn is_filled(&self) -> bool {
        Self::is_filled(self)
    }

    fn validate(&mut self) -> FormDateTimeResult<bool> {
        let filled = self.is_filled();
        let mut errors = Vec::new();
        for registered in &self.rules {
            if !filled && !registered.rule.applies_to_empty() {
                continue;
            }
            if !registered.rule.evaluate(&*self)? {
                errors.push(registered.message.clone());
            }
        }
        self.errors = errors;
        Ok(self.errors.is_empty())
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }

    fn render(&self) -> FormDateTimeResult<String> {
        render::render_control(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let control = DateTimeControl::new(FieldKind::DateTime, "when", Some("When"));
        assert_eq!(control.date_format(), "yyyy-mm-dd");
        assert_eq!(control.time_format(), "hh:ii");
        assert_eq!(control.full_pattern().host(), "%Y-%m-%d %H:%M");
        assert_eq!(control.caption(), Some("When"));
        assert_eq!(control.options().min_view, View::Hour);
        assert!(control.show_buttons());
        assert_eq!(control.buttons_position(), "after");
        assert!(!control.is_filled());
    }

    #[test]
    fn test_set_value_failure_keeps_state() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        control.set_value("2024-03-01").unwrap();
        assert!(control.set_value("not a date").is_err());
        assert_eq!(control.value(), Some(dt(2024, 3, 1, 0, 0)));
        assert_eq!(control.raw_value(), &RawValue::from("2024-03-01"));
    }

    #[test]
    fn test_set_empty_value() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        control.set_value("2024-03-01").unwrap();
        control.set_value("").unwrap();
        assert_eq!(control.value(), None);
        assert!(!control.is_filled());
    }

    #[test]
    fn test_format_change_reparses_later_values() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        control.set_date_format("dd/mm/yyyy");
        control.set_value("01/03/2024").unwrap();
        assert_eq!(control.value(), Some(dt(2024, 3, 1, 0, 0)));
    }

    #[test]
    fn test_show_meridian_appends_marker_once() {
        let mut control = DateTimeControl::new(FieldKind::Time, "at", None);
        control.set_show_meridian(true);
        assert_eq!(control.time_format(), "hh:ii P");
        control.set_show_meridian(true);
        assert_eq!(control.time_format(), "hh:ii P");
        assert_eq!(control.full_pattern().host(), "%H:%M %p");
    }

    #[test]
    fn test_show_meridian_hour_stays_24_hour() {
        let mut control = DateTimeControl::new(FieldKind::Time, "at", None);
        control.set_show_meridian(true);
        control.set_value("21:30 PM").unwrap();
        assert_eq!(control.value(), Some(dt(1970, 1, 1, 21, 30)));
        assert!(control.set_value("09:30 PM").is_err());
    }

    #[test]
    fn test_show_meridian_keeps_existing_marker() {
        let mut control = DateTimeControl::new(FieldKind::Time, "at", None);
        control.set_time_format("hh:ii p").set_show_meridian(true);
        assert_eq!(control.time_format(), "hh:ii p");
    }

    #[test]
    fn test_language() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        control.set_language("CS").unwrap();
        assert_eq!(control.options().language, "cs");
        let err = control.set_language("czech").unwrap_err();
        assert!(matches!(err, FormDateTimeError::InvalidArgument(_)));
        assert_eq!(control.options().language, "cs");
    }

    #[test]
    fn test_week_days() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        control.set_week_start(0).unwrap();
        assert_eq!(control.options().week_start, 0);
        assert!(control.set_week_start(7).is_err());
        control.set_days_of_week_disabled(&[0, 6]).unwrap();
        assert_eq!(control.options().days_of_week_disabled, Some(vec![0, 6]));
        assert!(control.set_days_of_week_disabled(&[1, 9]).is_err());
    }

    #[test]
    fn test_range_rule_sets_bounds_in_order() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        let (early, late) = (dt(2024, 1, 1, 0, 0), dt(2024, 12, 31, 0, 0));
        control.add_rule(Rule::Range(Some(late), Some(early)), None).unwrap();
        assert_eq!(control.lower_bound(), Some(early));
        assert_eq!(control.upper_bound(), Some(late));
        assert_eq!(control.rules()[0].rule, Rule::Range(Some(early), Some(late)));
    }

    #[test]
    fn test_incomplete_range_rejected() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        let err = control
            .add_rule(Rule::Range(Some(dt(2024, 1, 1, 0, 0)), None), None)
            .unwrap_err();
        assert!(matches!(err, FormDateTimeError::InvalidArgument(_)));
        assert!(control.rules().is_empty());
        assert_eq!(control.lower_bound(), None);
    }

    #[test]
    fn test_min_max_rules_set_bounds() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        control
            .add_rule(Rule::Min(dt(2024, 1, 1, 0, 0)), None)
            .unwrap()
            .add_rule(Rule::Max(dt(2024, 2, 1, 0, 0)), Some("Too late"))
            .unwrap();
        assert_eq!(control.lower_bound(), Some(dt(2024, 1, 1, 0, 0)));
        assert_eq!(control.upper_bound(), Some(dt(2024, 2, 1, 0, 0)));
        assert_eq!(control.rules()[1].message, "Too late");
    }

    #[test]
    fn test_required_registers_filled_once() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        control.set_required(Some("Fill it")).set_required(None);
        assert!(control.is_required());
        assert_eq!(control.rules().len(), 1);
        assert_eq!(control.rules()[0].rule, Rule::Filled);
    }

    #[test]
    fn test_validate_skips_bounds_when_empty() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        control.add_rule(Rule::Min(dt(2024, 1, 1, 0, 0)), Some("Too early")).unwrap();
        assert!(control.validate().unwrap());

        control.set_required(Some("Required"));
        assert!(!control.validate().unwrap());
        assert_eq!(control.errors(), &["Required".to_string()]);

        control.set_value("2023-06-01").unwrap();
        assert!(!control.validate().unwrap());
        assert_eq!(control.errors(), &["Too early".to_string()]);

        control.set_value("2024-06-01").unwrap();
        assert!(control.validate().unwrap());
        assert!(control.errors().is_empty());
    }

    #[test]
    fn test_load_date_trims_submission() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        let data: FormData = [("day[date]", "  2024-05-06 ")].into_iter().collect();
        control.load_http_data(&data);
        assert_eq!(control.value(), Some(dt(2024, 5, 6, 0, 0)));
        assert_eq!(control.raw_value(), &RawValue::from("2024-05-06"));
    }

    #[test]
    fn test_load_invalid_keeps_raw() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        control.add_rule(Rule::Valid, Some("Invalid")).unwrap();
        let data: FormData = [("day[date]", "31.02.")].into_iter().collect();
        control.load_http_data(&data);
        assert_eq!(control.value(), None);
        assert!(control.is_filled());
        assert!(!control.validate().unwrap());
        assert_eq!(control.errors(), &["Invalid".to_string()]);
    }

    #[test]
    fn test_load_space_padded_field_is_invalid() {
        let mut control = DateTimeControl::new(FieldKind::Date, "day", None);
        control.add_rule(Rule::Valid, Some("Invalid")).unwrap();
        let data: FormData = [("day[date]", "2024- 05-06")].into_iter().collect();
        control.load_http_data(&data);
        assert_eq!(control.value(), None);
        assert_eq!(control.raw_value(), &RawValue::from("2024- 05-06"));
        assert!(!control.validate().unwrap());
    }

    #[test]
    fn test_load_composite() {
        let mut control = DateTimeControl::new(FieldKind::DateTime, "when", None);
        let data: FormData = [("when[date]", "2024-05-06"), ("when[time]", "07:08")]
            .into_iter()
            .collect();
        control.load_http_data(&data);
        assert_eq!(control.value(), Some(dt(2024, 5, 6, 7, 8)));
        assert_eq!(control.raw_value(), &RawValue::from("2024-05-06 07:08"));
    }

    #[test]
    fn test_load_partial_composite_is_empty() {
        let mut control = DateTimeControl::new(FieldKind::DateTime, "when", None);
        control.set_value(dt(2020, 1, 1, 0, 0)).unwrap();
        let data: FormData = [("when[date]", "2024-05-06"), ("when[time]", " ")]
            .into_iter()
            .collect();
        control.load_http_data(&data);
        assert_eq!(control.value(), None);
        assert!(!control.is_filled());
    }

    #[test]
    fn test_load_time() {
        let mut control = DateTimeControl::new(FieldKind::Time, "at", None);
        let data: FormData = [("at[time]", "18:30")].into_iter().collect();
        control.load_http_data(&data);
        assert_eq!(control.value(), Some(dt(1970, 1, 1, 18, 30)));
    }

    #[test]
    fn test_control_part() {
        let mut control = DateTimeControl::new(FieldKind::DateTime, "when", None);
        control.set_date_format("dd.mm.yyyy");
        control.set_value(dt(2024, 5, 6, 7, 8)).unwrap();
        control.set_required(None).set_disabled(true);

        let date = control.control_part("date").unwrap();
        assert_eq!(date.get_attr("name"), Some("when[date]"));
        assert_eq!(date.get_attr("type"), Some("text"));
        assert_eq!(date.get_attr("value"), Some("06.05.2024"));
        assert!(date.has_attr("required"));
        assert!(date.has_attr("disabled"));
        assert!(date.get_attr("data-nette-rules").is_some());

        let time = control.control_part("time").unwrap();
        assert_eq!(time.get_attr("name"), Some("when[time]"));
        assert_eq!(time.get_attr("value"), Some("07:08"));
    }

    #[test]
    fn test_control_part_without_value_or_rules() {
        let control = DateTimeControl::new(FieldKind::Date, "day", None);
        let date = control.control_part("date").unwrap();
        assert!(!date.has_attr("value"));
        assert!(!date.has_attr("required"));
        assert!(!date.has_attr("data-nette-rules"));
    }

    #[test]
    fn test_control_part_unknown() {
        let control = DateTimeControl::new(FieldKind::Date, "day", None);
        for key in ["time", "week"] {
            let err = control.control_part(key).unwrap_err();
            assert!(matches!(err, FormDateTimeError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_control_type() {
        let control = DateTimeControl::new(FieldKind::Time, "at", None);
        assert_eq!(control.control_type(), "Time picker");
        assert_eq!(FormControl::name(&control), "at");
    }
}
