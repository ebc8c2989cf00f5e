//! Error report notification pipeline
//!
//! Turns error reports from browsers and server-side exception handlers into
//! an administrator email and an alert in the chat `errors` stream.
//!
//! # Flow
//!
//! [`ErrorReporter`] stamps the deployment onto the report and checks its kind,
//! [`Report`] gives defaulted field access, the [`format`] module renders
//! one [`Notification`] per channel, and [`Dispatcher`] delivers them with a
//! per-channel failure policy:
//!
//! - **Browser reports**: chat (when enabled) then email. Email failures propagate.
//! - **Server reports**: email (fail-silent) then chat (when enabled).
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use email_service::{EmailConfig, EmailService};
//! use error_notify::{Catalog, Dispatcher, ErrorReporter, NotifyConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mailer = Arc::new(EmailService::new(EmailConfig::from_env()?)?);
//!     let dispatcher = Dispatcher::new(NotifyConfig::from_env(), mailer);
//!     let reporter = ErrorReporter::new(dispatcher, Catalog::new());
//!
//!     let report = serde_json::json!({"node": "web-1", "message": "boom"});
//!     if let serde_json::Value::Object(report) = report {
//!         reporter.report_error("prod", "server", report).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod i18n;
pub mod report;
pub mod reporter;

pub use config::{NotifyConfig, ERRORS_STREAM};
pub use dispatch::Dispatcher;
pub use error::NotifyError;
pub use format::{user_info, Notification};
pub use i18n::Catalog;
pub use report::{Field, Report, ReportKind, UnknownReportKind};
pub use reporter::{ErrorReporter, ReportResponse, ResponseResult, INVALID_TYPE_MSGID};
