//! Logging integration.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-control spans.

use crate::settings::Settings;

/// Installs the global tracing subscriber described by `settings`.
///
/// The filter is read from `settings.log_level`; an invalid filter falls back
/// to `info`. Debug mode writes compact lines with the control span prefixed,
/// otherwise each event is one JSON object carrying the current control span.
///
/// Returns `false` when a global subscriber was already installed.
pub fn setup_logging(settings: &Settings) -> bool {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false);

    let installed = if settings.debug {
        builder.compact().try_init()
    } else {
        builder
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .try_init()
    };
    installed.is_ok()
}

/// Creates a tracing span for processing one control.
///
/// # Examples
///
/// ```
/// use form_datetime_core::logging::control_span;
///
/// let span = control_span("birthday");
/// let _guard = span.enter();
/// tracing::debug!("loading submitted value");
/// ```
pub fn control_span(name: &str) -> tracing::Span {
    tracing::debug_span!("control", name = name)
}
