//! Tracing setup and structured log helpers.

use std::time::Duration;

use i95connect_domain::ConnectorError;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable selecting the log format (`json` or `text`).
pub const LOG_FORMAT_ENV: &str = "I95CONNECT_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Output format of the stderr subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON, everything else plain text.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Install the global subscriber writing to stderr.
///
/// Stdout is reserved for command output. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let format = LogFormat::from_env_value(std::env::var(LOG_FORMAT_ENV).ok().as_deref());

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => {
            registry.with(fmt::layer().with_target(false).with_writer(std::io::stderr)).try_init()
        }
    };

    if result.is_ok() {
        tracing::debug!(?format, "Logging initialised");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier (e.g. `"run"`).
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Stable label for an error, suitable for log fields.
///
/// Falls back to `"other"` when the chain holds no [`ConnectorError`].
#[must_use]
pub fn error_label(error: &anyhow::Error) -> &'static str {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ConnectorError>())
        .map_or("other", ConnectorError::label)
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn json_format_is_case_insensitive() {
        assert_eq!(LogFormat::from_env_value(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some(" json ")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some("text")), LogFormat::Text);
        assert_eq!(LogFormat::from_env_value(None), LogFormat::Text);
    }

    #[test]
    fn error_label_finds_connector_error_in_chain() {
        let err = Err::<(), _>(ConnectorError::Config("missing".into()))
            .context("failed to load configuration")
            .unwrap_err();
        assert_eq!(error_label(&err), "config");
    }

    #[test]
    fn error_label_defaults_to_other() {
        assert_eq!(error_label(&anyhow::anyhow!("plain")), "other");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }
}
