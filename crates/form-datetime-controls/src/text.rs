//! A plain single-line text control.
//!
//! Forms usually mix pickers with ordinary inputs; [`TextControl`] is the
//! smallest [`FormControl`] that is not a picker.

use std::any::Any;

use form_datetime_core::{FormData, FormDateTimeResult};

use crate::control::FormControl;
use crate::html::Html;

/// An `<input type="text">` control.
#[derive(Debug, Clone, Default)]
pub struct TextControl {
    name: String,
    caption: Option<String>,
    value: String,
    required: bool,
    errors: Vec<String>,
}

impl TextControl {
    pub fn new(name: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            name: name.into(),
            caption: label.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Makes the control mandatory.
    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.required = required;
        self
    }
}

impl FormControl for TextControl {
    fn name(&self) -> &str {
        &self.name
    }

    fn control_type(&self) -> &'static str {
        "Text input"
    }

    fn load_http_data(&mut self, data: &FormData) {
        self.value = data.get(&self.name).map(str::trim).unwrap_or_default().to_string();
    }

    fn is_filled(&self) -> bool {
        !self.value.is_empty()
    }

    fn validate(&mut self) -> FormDateTimeResult<bool> {
        self.errors.clear();
        if self.required && !self.is_filled() {
            self.errors.push("Please complete mandatory field.".to_string());
        }
        Ok(self.errors.is_empty())
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }

    fn render(&self) -> FormDateTimeResult<String> {
        Ok(Html::el("input")
            .attr("type", "text")
            .attr("name", self.name.as_str())
            .attr("value", self.value.as_str())
            .flag("required", self.required)
            .to_string())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
