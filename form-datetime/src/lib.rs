//! # form-datetime
//!
//! Date, time and date-time picker controls for server-rendered forms.
//!
//! This is the meta-crate that re-exports the sub-crates. Depend on
//! `form-datetime` for everything, or on the individual crates for finer
//! control.
//!
//! ```
//! use std::sync::Arc;
//!
//! use form_datetime::controls::{bootstrap, Form};
//! use form_datetime::core::{FormData, Settings};
//!
//! let registry = Arc::new(bootstrap(&Settings::default()).unwrap());
//! let mut form = Form::new(registry);
//! form.add_date_picker("birthday", Some("Birthday")).unwrap();
//!
//! form.submit(&FormData::parse("birthday%5Bdate%5D=1990-12-24"));
//! assert!(form.is_valid().unwrap());
//! let value = form.picker("birthday").unwrap().value().unwrap();
//! assert_eq!(value.to_string(), "1990-12-24 00:00:00");
//! ```

/// Errors, settings, logging and submitted form data.
pub use form_datetime_core as core;

/// Picker controls, rules, registry and forms.
#[cfg(feature = "controls")]
pub use form_datetime_controls as controls;

/// Third-party crates used in the public API.
pub use chrono;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;

/// The most commonly used items.
pub mod prelude {
    pub use form_datetime_core::logging::setup_logging;
    pub use form_datetime_core::{FormData, FormDateTimeError, FormDateTimeResult, Settings};

    #[cfg(feature = "controls")]
    pub use form_datetime_controls::{
        bootstrap, ControlRegistry, DateTimeControl, FieldKind, Form, FormControl, RawValue, Rule,
    };
}
