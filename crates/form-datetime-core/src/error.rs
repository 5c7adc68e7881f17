//! Core error types for the form-datetime controls.
//!
//! [`FormDateTimeError`] separates three kinds of failure:
//!
//! - configuration mistakes made while setting a control up (`InvalidArgument`),
//! - submitted values that cannot be interpreted (`InvalidInput`),
//! - programmer errors that should never happen in a correct program
//!   (`InvalidState`).
//!
//! Rendering, settings loading and IO get their own variants.

use thiserror::Error;

/// The primary error type for the form-datetime crates.
///
/// `InvalidInput` is normally caught while loading submitted data and turned
/// into an empty value; every other variant surfaces to the caller that
/// configured or rendered the control.
#[derive(Error, Debug)]
pub enum FormDateTimeError {
    // ── Setup ────────────────────────────────────────────────────────

    /// A control was configured with an unsupported value (unknown enum
    /// name, malformed language code, malformed rule arguments).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ── Submission ───────────────────────────────────────────────────

    /// A non-empty value could not be coerced into a date/time.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ── Programmer errors ────────────────────────────────────────────

    /// An operation was invoked in a state where it cannot succeed, e.g. a
    /// validator run against the wrong control kind or a factory registered
    /// twice.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    // ── Templates ────────────────────────────────────────────────────

    /// The requested template file was not found.
    #[error("Template does not exist: {0}")]
    TemplateDoesNotExist(String),

    /// The template engine failed to parse or render a template.
    #[error("Template error: {0}")]
    TemplateError(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A settings file or environment value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FormDateTimeError {
    /// Returns `true` for errors caused by the submitted value rather than by
    /// the program or its configuration.
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// A convenience type alias for `Result<T, FormDateTimeError>`.
pub type FormDateTimeResult<T> = Result<T, FormDateTimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormDateTimeError::InvalidArgument("Invalid buttons position given".into());
        assert_eq!(err.to_string(), "Invalid argument: Invalid buttons position given");

        let err = FormDateTimeError::TemplateDoesNotExist("picker.html".into());
        assert_eq!(err.to_string(), "Template does not exist: picker.html");
    }

    #[test]
    fn test_is_user_error() {
        assert!(FormDateTimeError::InvalidInput("x".into()).is_user_error());
        assert!(!FormDateTimeError::InvalidArgument("x".into()).is_user_error());
        assert!(!FormDateTimeError::InvalidState("x".into()).is_user_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FormDateTimeError = io_err.into();
        assert!(matches!(err, FormDateTimeError::IoError(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
