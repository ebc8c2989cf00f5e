use serde::{Deserialize, Serialize};

/// Stream every error notification is posted to
pub const ERRORS_STREAM: &str = "errors";

/// Notification pipeline settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Bot identity used for chat alerts. `None` disables the chat channel.
    pub error_bot: Option<String>,
    /// Redact reporter emails and addresses in log lines
    pub redact_logs: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            error_bot: None,
            redact_logs: true,
        }
    }
}

impl NotifyConfig {
    /// Load notification configuration from environment variables
    pub fn from_env() -> Self {
        let error_bot = std::env::var("ERROR_BOT")
            .ok()
            .map(|bot| bot.trim().to_string())
            .filter(|bot| !bot.is_empty());

        let redact_logs = std::env::var("ERROR_REPORT_REDACT_LOGS")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        Self {
            error_bot,
            redact_logs,
        }
    }

    pub fn with_error_bot(mut self, bot: impl Into<String>) -> Self {
        self.error_bot = Some(bot.into());
        self
    }
}
