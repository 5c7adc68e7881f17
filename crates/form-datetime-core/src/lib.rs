//! # form-datetime-core
//!
//! Core types shared by the picker controls: error types, settings and their
//! loaders, logging setup, and the submitted form data dictionary.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Control defaults and logging/template configuration
//! - [`settings_loader`] - TOML/JSON/environment settings loading
//! - [`logging`] - Tracing-based logging integration
//! - [`form_data`] - Submitted form fields

pub mod error;
pub mod form_data;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{FormDateTimeError, FormDateTimeResult};
pub use form_data::FormData;
pub use settings::Settings;
