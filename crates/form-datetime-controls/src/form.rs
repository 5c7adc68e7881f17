//! A form holding picker and plain controls.
//!
//! [`Form`] owns its controls, creates pickers through a shared
//! [`ControlRegistry`], loads submitted data into every control and collects
//! their validation errors by control name.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use form_datetime_core::{FormData, FormDateTimeError, FormDateTimeResult};

use crate::control::{FieldKind, FormControl};
use crate::picker::DateTimeControl;
use crate::registry::ControlRegistry;
use crate::text::TextControl;

/// A form: an ordered set of uniquely named controls.
#[derive(Debug)]
pub struct Form {
    registry: Arc<ControlRegistry>,
    controls: Vec<Box<dyn FormControl>>,
    bound: bool,
    errors: HashMap<String, Vec<String>>,
}

impl Form {
    /// Creates an empty form whose pickers come from `registry`.
    pub fn new(registry: Arc<ControlRegistry>) -> Self {
        Self {
            registry,
            controls: Vec::new(),
            bound: false,
            errors: HashMap::new(),
        }
    }

    /// Adds a picker through the factory registered under `method`.
    pub fn add_picker(
        &mut self,
        method: &str,
        name: &str,
        label: Option<&str>,
    ) -> FormDateTimeResult<&mut DateTimeControl> {
        self.ensure_unique(name)?;
        let control = self.registry.create(method, name, label)?;
        self.controls.push(Box::new(control));
        self.picker_mut(name).ok_or_else(|| {
            FormDateTimeError::InvalidState(format!("Control '{name}' was not added."))
        })
    }

    /// Adds a date picker through its registered method.
    pub fn add_date_picker(
        &mut self,
        name: &str,
        label: Option<&str>,
    ) -> FormDateTimeResult<&mut DateTimeControl> {
        self.add_kind(FieldKind::Date, name, label)
    }

    /// Adds a date & time picker through its registered method.
    pub fn add_date_time_picker(
        &mut self,
        name: &str,
        label: Option<&str>,
    ) -> FormDateTimeResult<&mut DateTimeControl> {
        self.add_kind(FieldKind::DateTime, name, label)
    }

    /// Adds a time picker through its registered method.
    pub fn add_time_picker(
        &mut self,
        name: &str,
        label: Option<&str>,
    ) -> FormDateTimeResult<&mut DateTimeControl> {
        self.add_kind(FieldKind::Time, name, label)
    }

    /// Adds a plain text input.
    pub fn add_text(&mut self, name: &str, label: Option<&str>) -> FormDateTimeResult<()> {
        self.add_control(Box::new(TextControl::new(name, label)))
    }

    /// Adds any control.
    pub fn add_control(&mut self, control: Box<dyn FormControl>) -> FormDateTimeResult<()> {
        self.ensure_unique(control.name())?;
        self.controls.push(control);
        Ok(())
    }

    fn add_kind(
        &mut self,
        kind: FieldKind,
        name: &str,
        label: Option<&str>,
    ) -> FormDateTimeResult<&mut DateTimeControl> {
        let method = self
            .registry
            .method_for(kind)
            .ok_or_else(|| {
                FormDateTimeError::InvalidState(format!("{kind} control is not registered."))
            })?
            .to_string();
        self.add_picker(&method, name, label)
    }

    fn ensure_unique(&self, name: &str) -> FormDateTimeResult<()> {
        if self.control(name).is_some() {
            return Err(FormDateTimeError::InvalidState(format!(
                "Control '{name}' already exists in the form."
            )));
        }
        Ok(())
    }

    /// The control named `name`.
    pub fn control(&self, name: &str) -> Option<&dyn FormControl> {
        self.controls
            .iter()
            .find(|c| c.name() == name)
            .map(AsRef::as_ref)
    }

    /// The picker named `name`, if that control is a picker.
    pub fn picker(&self, name: &str) -> Option<&DateTimeControl> {
        self.control(name)?.as_any().downcast_ref()
    }

    /// The picker named `name` for configuration.
    pub fn picker_mut(&mut self, name: &str) -> Option<&mut DateTimeControl> {
        self.controls
            .iter_mut()
            .find(|c| c.name() == name)?
            .as_any_mut()
            .downcast_mut()
    }

    /// All controls in insertion order.
    pub fn controls(&self) -> &[Box<dyn FormControl>] {
        &self.controls
    }

    /// Loads submitted data into every control.
    pub fn submit(&mut self, data: &FormData) {
        debug!(fields = data.len(), controls = self.controls.len(), "form submitted");
        for control in &mut self.controls {
            control.load_http_data(data);
        }
        self.bound = true;
        self.errors.clear();
    }

    /// Returns `true` once data has been submitted.
    pub const fn is_bound(&self) -> bool {
        self.bound
    }

    /// Validates every control. An unsubmitted form is never valid.
    pub fn is_valid(&mut self) -> FormDateTimeResult<bool> {
        if !self.bound {
            return Ok(false);
        }
        self.errors.clear();
        for control in &mut self.controls {
            if !control.validate()? {
                self.errors
                    .insert(control.name().to_string(), control.errors().to_vec());
            }
        }
        Ok(self.errors.is_empty())
    }

    /// Failure messages of the last validation, by control name.
    pub fn errors(&self) -> &HashMap<String, Vec<String>> {
        &self.errors
    }

    /// Renders every control, one per line.
    pub fn render(&self) -> FormDateTimeResult<String> {
        let parts = self
            .controls
            .iter()
            .map(|c| c.render())
            .collect::<FormDateTimeResult<Vec<_>>>()?;
        Ok(parts.join("\n"))
    }
}
