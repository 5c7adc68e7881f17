//! Registration of the picker factory methods.
//!
//! An application builds one [`ControlRegistry`] at startup, usually with
//! [`bootstrap`], and hands it to every [`Form`](crate::form::Form). Each
//! picker kind is registered under a method name (`addDatePicker` and
//! friends) together with the defaults new controls start from.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::info;

use form_datetime_core::settings::{DEFAULT_DATE_FORMAT, DEFAULT_LANGUAGE, DEFAULT_TIME_FORMAT};
use form_datetime_core::{FormDateTimeError, FormDateTimeResult, Settings};

use crate::control::FieldKind;
use crate::options::{language_code, weekday, ButtonsPosition, PickerPosition};
use crate::picker::DateTimeControl;

/// The defaults a registered factory creates controls with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDefaults {
    pub date_format: String,
    pub time_format: String,
    pub language: String,
    pub week_start: u8,
    pub buttons_position: ButtonsPosition,
    pub picker_position: PickerPosition,
    pub template_dir: Option<PathBuf>,
}

impl Default for ControlDefaults {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            week_start: 1,
            buttons_position: ButtonsPosition::Right,
            picker_position: PickerPosition::BottomRight,
            template_dir: None,
        }
    }
}

impl ControlDefaults {
    /// Reads and validates the control defaults from settings.
    pub fn from_settings(settings: &Settings) -> FormDateTimeResult<Self> {
        Ok(Self {
            date_format: settings.date_format.clone(),
            time_format: settings.time_format.clone(),
            language: language_code(&settings.language)?,
            week_start: weekday(settings.week_start)?,
            buttons_position: settings.buttons_position.parse()?,
            picker_position: settings.picker_position.parse()?,
            template_dir: settings.template_dir.clone(),
        })
    }
}

#[derive(Debug, Clone)]
struct Factory {
    kind: FieldKind,
    defaults: ControlDefaults,
}

/// The registered picker factories, keyed by method name.
#[derive(Debug, Default)]
pub struct ControlRegistry {
    factories: HashMap<String, Factory>,
    methods: HashMap<FieldKind, String>,
}

impl ControlRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the factory of `kind` under `method`.
    ///
    /// Every kind registers at most once, and a method name can only name
    /// one kind. Both are reported as [`FormDateTimeError::InvalidState`].
    pub fn register(
        &mut self,
        kind: FieldKind,
        method: &str,
        defaults: ControlDefaults,
    ) -> FormDateTimeResult<()> {
        if self.methods.contains_key(&kind) {
            return Err(FormDateTimeError::InvalidState(format!(
                "{kind} control already registered."
            )));
        }
        if let Some(existing) = self.factories.get(method) {
            return Err(FormDateTimeError::InvalidState(format!(
                "Method '{method}' is already taken by the {} control.",
                existing.kind
            )));
        }

        info!(%kind, method, "registered picker control");
        self.factories
            .insert(method.to_string(), Factory { kind, defaults });
        self.methods.insert(kind, method.to_string());
        Ok(())
    }

    /// Creates a control through the factory registered under `method`.
    pub fn create(
        &self,
        method: &str,
        name: &str,
        label: Option<&str>,
    ) -> FormDateTimeResult<DateTimeControl> {
        let factory = self.factories.get(method).ok_or_else(|| {
            FormDateTimeError::InvalidState(format!("No picker control registered as '{method}'."))
        })?;
        Ok(DateTimeControl::with_defaults(
            factory.kind,
            name,
            label,
            &factory.defaults,
        ))
    }

    /// The method name `kind` is registered under.
    pub fn method_for(&self, kind: FieldKind) -> Option<&str> {
        self.methods.get(&kind).map(String::as_str)
    }

    /// Returns `true` if `kind` has a factory.
    pub fn is_registered(&self, kind: FieldKind) -> bool {
        self.methods.contains_key(&kind)
    }
}

/// Builds a registry with all three pickers registered under the configured
/// method names.
pub fn bootstrap(settings: &Settings) -> FormDateTimeResult<ControlRegistry> {
    let defaults = ControlDefaults::from_settings(settings)?;
    let mut registry = ControlRegistry::new();
    registry.register(FieldKind::Date, &settings.methods.date, defaults.clone())?;
    registry.register(FieldKind::DateTime, &settings.methods.date_time, defaults.clone())?;
    registry.register(FieldKind::Time, &settings.methods.time, defaults)?;
    Ok(registry)
}
