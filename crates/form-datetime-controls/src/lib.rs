//! # form-datetime-controls
//!
//! Date, time and date-time picker controls for server-rendered forms.
//!
//! A picker translates its client-side format (`dd.mm.yyyy`, `hh:ii P`) into
//! a chrono pattern, coerces submitted and programmatic values into a
//! [`NaiveDateTime`](chrono::NaiveDateTime), validates them against its
//! rules and renders its inputs together with the option map the client
//! picker reads.
//!
//! ## Modules
//!
//! - [`format`] - Picker format tokens and their chrono translation
//! - [`value`] - Raw input shapes
//! - [`coerce`] - Raw input to canonical value
//! - [`rules`] - Validation rules and their export to the client
//! - [`options`] - Picker options and their string forms
//! - [`control`] - The control trait and picker kinds
//! - [`picker`] - The picker control
//! - [`client_settings`] - The client picker option map
//! - [`html`] - HTML element builder
//! - [`render`] - Tera rendering of whole widgets
//! - [`text`] - Plain text control
//! - [`registry`] - Factory registration and bootstrap
//! - [`form`] - Form container

pub mod client_settings;
pub mod coerce;
pub mod control;
pub mod form;
pub mod format;
pub mod html;
pub mod options;
pub mod picker;
pub mod registry;
pub mod render;
pub mod rules;
pub mod text;
pub mod value;

pub use control::{FieldKind, FormControl, Part};
pub use form::Form;
pub use picker::DateTimeControl;
pub use registry::{bootstrap, ControlDefaults, ControlRegistry};
pub use rules::Rule;
pub use value::RawValue;
