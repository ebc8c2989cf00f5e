use error_common::sanitize_subject;

use super::{user_info, Notification, NO_STACK_TRACE, REQUEST_META_FIELDS};
use crate::report::Report;

fn subject(report: &Report) -> String {
    sanitize_subject(&format!("{}: {}", report.get("node"), report.get("message")))
}

/// The report's stack trace, or a placeholder when it has none
pub fn stack_trace(report: &Report) -> String {
    let field = report.get("stack_trace");
    if field.is_present() {
        field.to_string()
    } else {
        NO_STACK_TRACE.to_string()
    }
}

/// Request summary block. `fenced` wraps the entries in a chat code fence.
pub fn request_info(report: &Report, fenced: bool) -> String {
    let mut out = String::from("Request info:\n");
    if fenced {
        out.push_str("~~~~\n");
    }

    out.push_str(&format!("- path: {}\n", report.get("path")));
    out.push_str(&format!("- {}: {}\n", report.get("method"), report.get("data")));
    for field in REQUEST_META_FIELDS {
        out.push_str(&format!("- {}: \"{}\"\n", field, report.get_ignore_case(field)));
    }

    if fenced {
        out.push_str("~~~~");
    }
    out
}

/// Admin email for a server-side exception
pub fn server_email_notification(report: &Report) -> Notification {
    let body = format!(
        "Error generated by {}\n\n{}\n\n{}",
        user_info(report),
        stack_trace(report),
        request_info(report, false)
    );

    Notification::new(subject(report), body)
}

/// Chat alert for a server-side exception
pub fn server_chat_notification(report: &Report) -> Notification {
    let body = format!(
        "Error generated by {}\n\n~~~~ pytb\n{}\n\n~~~~\n{}",
        user_info(report),
        stack_trace(report),
        request_info(report, true)
    );

    Notification::new(subject(report), body)
}
