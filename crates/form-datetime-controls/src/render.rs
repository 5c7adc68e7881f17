//! Template rendering of whole picker widgets.
//!
//! Widgets are rendered with [Tera](https://keats.github.io/tera/). The
//! bundled `default.html` template is compiled into the crate; custom
//! templates are read from disk on every render so edits show up without a
//! restart.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context, Tera};

use form_datetime_core::{FormDateTimeError, FormDateTimeResult};

use crate::control::FormControl;
use crate::picker::DateTimeControl;

/// The name of the bundled template.
pub const DEFAULT_TEMPLATE_NAME: &str = "default.html";

/// The bundled template source.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.html");

/// The directory holding the bundled templates.
pub fn bundled_template_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Finds a template file.
///
/// `path` is tried as given, then relative to `template_dir`, then relative
/// to the bundled template directory.
pub fn resolve_template(path: &Path, template_dir: Option<&Path>) -> FormDateTimeResult<PathBuf> {
    let candidates = std::iter::once(path.to_path_buf())
        .chain(template_dir.map(|dir| dir.join(path)))
        .chain(std::iter::once(bundled_template_dir().join(path)));

    for candidate in candidates {
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(FormDateTimeError::TemplateDoesNotExist(format!(
        "Template file '{}' was not found",
        path.display()
    )))
}

#[derive(Debug, Serialize)]
struct InputContext {
    part: &'static str,
    html: String,
}

/// The variables a widget template sees.
#[derive(Debug, Serialize)]
struct WidgetContext<'a> {
    name: &'a str,
    caption: Option<&'a str>,
    value: Option<String>,
    settings: String,
    date_input: Option<String>,
    time_input: Option<String>,
    inputs: Vec<InputContext>,
    show_buttons: bool,
    buttons_position: &'static str,
    show_trigger_button: bool,
    show_cancel_button: bool,
}

impl<'a> WidgetContext<'a> {
    fn new(control: &'a DateTimeControl) -> FormDateTimeResult<Self> {
        let mut inputs = Vec::new();
        for part in control.kind().parts() {
            inputs.push(InputContext {
                part: part.as_str(),
                html: control.control_part(part.as_str())?.to_string(),
            });
        }
        let input = |part: &str| {
            inputs
                .iter()
                .find(|input| input.part == part)
                .map(|input| input.html.clone())
        };
        let date_input = input("date");
        let time_input = input("time");

        let settings = serde_json::to_string(&control.settings())
            .map_err(|e| FormDateTimeError::TemplateError(e.to_string()))?;

        Ok(Self {
            name: control.name(),
            caption: control.caption(),
            value: control.value().map(|v| control.full_pattern().format(&v)),
            settings,
            date_input,
            time_input,
            inputs,
            show_buttons: control.show_buttons(),
            buttons_position: control.buttons_position(),
            show_trigger_button: control.options().trigger_button,
            show_cancel_button: control.options().cancel_button,
        })
    }
}

/// Renders `control` with its template.
pub fn render_control(control: &DateTimeControl) -> FormDateTimeResult<String> {
    let source = match control.template_path() {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            FormDateTimeError::TemplateDoesNotExist(format!(
                "Error reading template '{}': {e}",
                path.display()
            ))
        })?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let widget = WidgetContext::new(control)?;
    let context = Context::from_serialize(&widget).map_err(template_error)?;
    render_source(&source, &context)
}

fn render_source(source: &str, context: &Context) -> FormDateTimeResult<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(DEFAULT_TEMPLATE_NAME, source)
        .map_err(template_error)?;
    tera.render(DEFAULT_TEMPLATE_NAME, context)
        .map_err(template_error)
}

fn template_error(err: tera::Error) -> FormDateTimeError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    FormDateTimeError::TemplateError(message)
}
