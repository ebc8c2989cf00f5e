use error_common::sanitize_subject;

use super::{user_info, Notification};
use crate::report::{Field, Report};

/// Admin email for an uncaught client-side exception
pub fn browser_email_notification(report: &Report) -> Notification {
    let subject = sanitize_subject(&format!("Browser error for {}", user_info(report)));

    let mut body = format!(
        "User: {} <{}> on {}\n\n\
         Message:\n{}\n\n\
         Stacktrace:\n{}\n\n\
         User agent: {}\n\
         href: {}\n\
         Server path: {}\n\
         Deployed version: {}\n",
        report.get("user_full_name"),
        report.get("user_email"),
        report.get("deployment"),
        report.get("message"),
        report.get("stacktrace"),
        report.get("user_agent"),
        report.get("href"),
        report.get("server_path"),
        report.get("version"),
    );

    if let Some(more_info) = report.more_info() {
        body.push_str("\nAdditional information:");
        for (key, value) in more_info {
            body.push_str(&format!("\n  {}: {}", key, Field::from(value)));
        }
    }

    body.push_str(&format!("\n\nLog:\n{}", report.get("log")));

    Notification::new(subject, body)
}

/// Chat alert for an uncaught client-side exception
pub fn browser_chat_notification(report: &Report) -> Notification {
    let subject = sanitize_subject(&format!("JS error: {}", report.get("user_email")));
    let body = format!(
        "User: {}\nMessage: {}\n",
        user_info(report),
        report.get("message")
    );

    Notification::new(subject, body)
}
