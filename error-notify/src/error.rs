use chat_service::ChatError;
use email_service::EmailError;
use thiserror::Error;

/// Errors surfaced by the notification pipeline
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The caller named a report kind we do not handle. `message` is already translated.
    #[error("{message}")]
    InvalidType { kind: String, message: String },

    #[error("Email delivery failed: {0}")]
    Email(#[from] EmailError),

    #[error("Chat delivery failed: {0}")]
    Chat(#[from] ChatError),
}

impl NotifyError {
    /// HTTP status matching the error
    pub fn status_code(&self) -> u16 {
        match self {
            NotifyError::InvalidType { .. } => 400,
            NotifyError::Email(_) | NotifyError::Chat(_) => 502,
        }
    }

    /// Short machine-readable error category
    pub fn error_type(&self) -> &'static str {
        match self {
            NotifyError::InvalidType { .. } => "invalid_type",
            NotifyError::Email(_) => "email_delivery",
            NotifyError::Chat(_) => "chat_delivery",
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;
