//! Text rendering of error reports for each delivery channel
//!
//! Every formatter is a pure function of the [`Report`]. Absent fields render as
//! `None`, so formatting cannot fail on a partial report.

mod browser;
mod server;

pub use browser::{browser_chat_notification, browser_email_notification};
pub use server::{request_info, server_chat_notification, server_email_notification, stack_trace};

use crate::report::Report;

/// Request metadata fields listed after path and method, in output order
pub const REQUEST_META_FIELDS: [&str; 3] = ["REMOTE_ADDR", "QUERY_STRING", "SERVER_NAME"];

/// Placeholder used when a server report carries no stack trace
pub const NO_STACK_TRACE: &str = "No stack trace available";

/// A rendered message ready for one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Single-line subject (email subject or chat topic)
    pub subject: String,
    pub body: String,
}

impl Notification {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Who hit the error, and on which deployment
pub fn user_info(report: &Report) -> String {
    let name = report.get("user_full_name");
    let email = report.get("user_email");

    let who = if name.is_present() && email.is_present() {
        format!("{} ({})", name, email)
    } else {
        "Anonymous user (not logged in)".to_string()
    };

    format!("{} on {} deployment", who, report.get("deployment"))
}
