use thiserror::Error;

/// Simplified error enum for startup and serving failures
#[derive(Error, Debug)]
pub enum RelayError {
    /// Network communication errors
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server runtime errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for Error Relay operations
pub type Result<T> = std::result::Result<T, RelayError>;

/// Record an error with the context it happened in
pub fn log_error(context: &str, error: &RelayError) {
    tracing::error!(
        context = context,
        error = %error,
        "Error Relay error occurred"
    );
}
