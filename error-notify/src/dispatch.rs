use chat_service::{RealmDirectory, StreamMessage, StreamMessenger};
use email_service::AdminMailer;
use logger_redacted::{PiiRedactor, RedactionConfig};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{NotifyConfig, ERRORS_STREAM};
use crate::error::Result;
use crate::format::{
    browser_chat_notification, browser_email_notification, server_chat_notification,
    server_email_notification, Notification,
};
use crate::report::Report;

/// Chat delivery bound to the configured bot identity
struct ChatChannel {
    bot: String,
    realms: Arc<dyn RealmDirectory>,
    messenger: Arc<dyn StreamMessenger>,
}

impl ChatChannel {
    async fn post(&self, notification: Notification) -> Result<()> {
        let realm = self.realms.realm_for_bot(&self.bot).await?;
        let message = StreamMessage::new(
            realm,
            self.bot.as_str(),
            ERRORS_STREAM,
            notification.subject,
            notification.body,
        );
        self.messenger.send_stream_message(&message).await?;
        Ok(())
    }
}

/// Routes formatted reports to the admin email and chat stream channels
pub struct Dispatcher {
    config: NotifyConfig,
    mailer: Arc<dyn AdminMailer>,
    chat: Option<ChatChannel>,
    redactor: PiiRedactor,
}

impl Dispatcher {
    /// Dispatcher with only the email channel. See [`Dispatcher::with_chat`].
    pub fn new(config: NotifyConfig, mailer: Arc<dyn AdminMailer>) -> Self {
        Self {
            config,
            mailer,
            chat: None,
            redactor: PiiRedactor::new(RedactionConfig::default()),
        }
    }

    /// Attach chat delivery. Ignored unless an error bot is configured.
    pub fn with_chat(
        mut self,
        realms: Arc<dyn RealmDirectory>,
        messenger: Arc<dyn StreamMessenger>,
    ) -> Self {
        match &self.config.error_bot {
            Some(bot) => {
                self.chat = Some(ChatChannel {
                    bot: bot.clone(),
                    realms,
                    messenger,
                });
            }
            None => debug!("No error bot configured, chat notifications stay disabled"),
        }
        self
    }

    pub fn chat_enabled(&self) -> bool {
        self.chat.is_some()
    }

    pub fn email_enabled(&self) -> bool {
        self.mailer.is_enabled()
    }

    /// Chat first when enabled, then email.
    ///
    /// Both channels are always attempted. An email failure is returned to the
    /// caller; a chat failure is returned when email succeeds.
    pub async fn notify_browser_error(&self, report: &Report) -> Result<()> {
        info!(
            reporter = %self.reporter(report),
            deployment = %report.get("deployment"),
            "Dispatching browser error report"
        );

        let chat_result = match &self.chat {
            Some(chat) => chat.post(browser_chat_notification(report)).await,
            None => Ok(()),
        };

        let email = browser_email_notification(report);
        let email_result = self
            .mailer
            .mail_admins(&email.subject, &email.body, false)
            .await;

        match (email_result, chat_result) {
            (Err(email_err), Err(chat_err)) => {
                warn!(error = %chat_err, "Chat notification for browser error failed");
                Err(email_err.into())
            }
            (Err(email_err), Ok(())) => Err(email_err.into()),
            (Ok(()), chat_result) => chat_result,
        }
    }

    /// Email first, fail-silent, then chat when enabled.
    pub async fn notify_server_error(&self, report: &Report) -> Result<()> {
        info!(
            node = %report.get("node"),
            deployment = %report.get("deployment"),
            "Dispatching server error report"
        );

        let email = server_email_notification(report);
        if let Err(e) = self.mailer.mail_admins(&email.subject, &email.body, true).await {
            warn!(error = %e, "Server error email was not delivered");
        }

        match &self.chat {
            Some(chat) => chat.post(server_chat_notification(report)).await,
            None => Ok(()),
        }
    }

    fn reporter(&self, report: &Report) -> String {
        let email = report.get("user_email").to_string();
        if self.config.redact_logs {
            self.redactor.redact(&email)
        } else {
            email
        }
    }
}
