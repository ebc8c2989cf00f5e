//! Common error handling utilities for Error Relay
//!
//! This crate provides the error type shared by the Error Relay binaries and the
//! sanitization helpers every notification channel relies on before text leaves
//! the process.
//!
//! # Key Features
//!
//! - **Standardized Error Type**: one `RelayError` enum for startup and serving failures
//! - **Subject Sanitization**: CR/LF escaping for single-line transports
//!   (mail headers, chat topics)
//! - **Observability**: `log_error` records errors through `tracing`
//!
//! # Example
//!
//! ```rust
//! use error_common::sanitize_subject;
//!
//! let subject = sanitize_subject("web-1: boom\r\nBcc: attacker@example.com");
//! assert_eq!(subject, "web-1: boom\\r\\nBcc: attacker@example.com");
//! assert!(!subject.contains('\n'));
//! ```

pub mod types;
pub mod sanitization;

pub use types::*;
pub use sanitization::*;
