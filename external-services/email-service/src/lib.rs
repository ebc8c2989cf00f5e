//! Administrator mail delivery for Error Relay
//!
//! Error notifications are mailed to the configured administrator list. This
//! crate owns that transport and exposes it through the [`AdminMailer`] trait so
//! the notification pipeline never touches SMTP directly.
//!
//! # Key Features
//!
//! - **Stalwart SMTP**: message building with `mail-builder`, delivery with `mail-send`
//! - **Admin Digest**: one message addressed to every configured administrator
//! - **Subject Prefix**: configurable prefix so mail filters can route reports
//! - **Fail-Silent Sends**: callers may ask for delivery errors to be logged and dropped
//! - **Console Provider**: log messages instead of sending them during development
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use email_service::{AdminMailer, EmailConfig, EmailService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = EmailService::new(EmailConfig::from_env()?)?;
//!
//!     service
//!         .mail_admins("web-1: connection reset", "Error generated by ...", true)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration Example
//!
//! ```text
//! EMAIL_ENABLED=true
//! EMAIL_PROVIDER=smtp
//! EMAIL_FROM=errors@example.com
//! EMAIL_ADMINS=ops@example.com,oncall@example.com
//! EMAIL_SUBJECT_PREFIX="[errors] "
//! SMTP_HOST=smtp.example.com
//! SMTP_PORT=587
//! ```

pub mod service;
pub mod error;

pub use service::*;
pub use error::*;
