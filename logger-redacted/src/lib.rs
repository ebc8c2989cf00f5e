pub mod redactor;
pub mod config;
pub mod error;

pub use redactor::*;
pub use config::*;
pub use error::*;

use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging setup with PII redaction for error reports
///
/// Error reports carry reporter email addresses and client IP addresses. This
/// crate installs the process-wide `tracing` subscriber and provides the
/// [`PiiRedactor`] used to keep those values out of log lines.
///
/// # Detected Data Types
///
/// - **Email Addresses**: user@example.com → EMAIL[hash] or u***@e***
/// - **IPv4 Addresses**: 192.168.1.1 → IP[hash] or 192.***.***.1
///
/// # Example
///
/// ```rust,no_run
/// use logger_redacted::{init_tracing, LoggerConfig, PiiRedactor, RedactionConfig};
///
/// init_tracing(&LoggerConfig::from_env()).expect("tracing");
///
/// let redactor = PiiRedactor::new(RedactionConfig::default());
/// tracing::info!(reporter = %redactor.redact("alice@example.com"), "report received");
/// ```
///
/// `RUST_LOG` overrides `LOG_LEVEL` when both are set.
pub fn init_tracing(config: &LoggerConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| LoggerError::InvalidFilter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json_output {
        // Structured JSON logging for production
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_level(true),
            )
            .try_init()
    };

    installed.map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        std::env::remove_var("RUST_LOG");
        let config = LoggerConfig {
            log_level: "error_relay=loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(init_tracing(&config), Err(LoggerError::InvalidFilter(_))));
    }
}
