// Admin mail delivery with SMTP and console providers
use crate::error::{EmailError, EmailResult};
use async_trait::async_trait;
use mail_builder::MessageBuilder;
use mail_send::SmtpClientBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Email provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmailProvider {
    /// Generic SMTP server
    Smtp {
        host: String,
        port: u16,
        username: Option<String>,
        password: Option<String>,
        use_tls: bool,
    },
    /// Write messages to the log instead of sending them
    Console,
}

/// Email service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    pub provider: EmailProvider,
    pub from_email: String,
    pub from_name: String,
    pub email_enabled: bool,
    /// Recipients of every admin notification
    pub admins: Vec<String>,
    /// Prepended to every admin subject
    pub subject_prefix: String,
}

impl EmailConfig {
    /// Load email configuration from environment variables
    pub fn from_env() -> EmailResult<Self> {
        let email_enabled = std::env::var("EMAIL_ENABLED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        let from_email = std::env::var("EMAIL_FROM")
            .unwrap_or_else(|_| "errors@localhost".to_string());

        let from_name = std::env::var("EMAIL_FROM_NAME")
            .unwrap_or_else(|_| "Error Relay".to_string());

        let admins = std::env::var("EMAIL_ADMINS")
            .map(|list| parse_address_list(&list))
            .unwrap_or_default();

        let subject_prefix = std::env::var("EMAIL_SUBJECT_PREFIX").unwrap_or_default();

        let provider = match std::env::var("EMAIL_PROVIDER") {
            Ok(provider_type) => match provider_type.to_lowercase().as_str() {
                "smtp" => smtp_provider_from_env(),
                "console" => EmailProvider::Console,
                other => {
                    return Err(EmailError::Configuration(format!(
                        "unsupported email provider: {}",
                        other
                    )))
                }
            },
            // Default to SMTP
            Err(_) => smtp_provider_from_env(),
        };

        Ok(Self {
            provider,
            from_email,
            from_name,
            email_enabled,
            admins,
            subject_prefix,
        })
    }
}

/// SMTP submission port for implicit TLS
pub const SMTPS_PORT: u16 = 465;
/// SMTP submission port for plain connections
pub const SUBMISSION_PORT: u16 = 587;

/// `use_tls` selects implicit TLS, so the default port follows it.
fn smtp_provider_from_env() -> EmailProvider {
    let use_tls = std::env::var("SMTP_TLS_ENABLED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(true);

    EmailProvider::Smtp {
        host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
        port: std::env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(default_smtp_port(use_tls)),
        username: std::env::var("SMTP_USERNAME").ok(),
        password: std::env::var("SMTP_PASSWORD").ok(),
        use_tls,
    }
}

fn default_smtp_port(use_tls: bool) -> u16 {
    if use_tls {
        SMTPS_PORT
    } else {
        SUBMISSION_PORT
    }
}

fn parse_address_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect()
}

/// Delivery of notifications to the site administrators
#[async_trait]
pub trait AdminMailer: Send + Sync {
    /// Mail `subject`/`body` to every administrator.
    ///
    /// With `fail_silently` set, delivery errors are logged and `Ok(())` is returned.
    async fn mail_admins(&self, subject: &str, body: &str, fail_silently: bool) -> EmailResult<()>;

    /// Whether `mail_admins` would reach anyone
    fn is_enabled(&self) -> bool;
}

/// Email service for sending admin notifications via Stalwart
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    /// Create a new email service
    pub fn new(config: EmailConfig) -> EmailResult<Self> {
        if !config.email_enabled {
            info!("Email service disabled by configuration");
        }
        if let EmailProvider::Smtp { host, .. } = &config.provider {
            if host.is_empty() {
                return Err(EmailError::Configuration("SMTP host is empty".to_string()));
            }
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    /// Send a plain text email
    pub async fn send_email(&self, to: &[String], subject: &str, body: &str) -> EmailResult<String> {
        if !self.config.email_enabled {
            debug!(recipients = to.len(), "Email disabled, skipping send");
            return Ok(format!("disabled-{}", Uuid::new_v4()));
        }

        if let EmailProvider::Console = self.config.provider {
            let message_id = format!("console-{}", Uuid::new_v4());
            info!(
                message_id = %message_id,
                recipients = ?to,
                subject = subject,
                body = body,
                "Console email provider, message not sent"
            );
            return Ok(message_id);
        }

        let message = MessageBuilder::new()
            .from((
                self.config.from_name.as_str(),
                self.config.from_email.as_str(),
            ))
            .to(to.iter().map(String::as_str).collect::<Vec<_>>())
            .subject(subject)
            .text_body(body);

        self.send_message(message).await
    }

    /// Internal method to send a constructed message using configured provider
    async fn send_message(&self, message: MessageBuilder<'_>) -> EmailResult<String> {
        match &self.config.provider {
            EmailProvider::Smtp { host, port, username, password, use_tls } => {
                // Build SMTP client
                let mut smtp_client = SmtpClientBuilder::new(host.as_str(), *port)
                    .implicit_tls(*use_tls);

                // Add credentials if provided
                if let (Some(user), Some(pass)) = (username, password) {
                    smtp_client = smtp_client.credentials((user.as_str(), pass.as_str()));
                }

                // Connect and send
                let mut client = smtp_client
                    .connect()
                    .await
                    .map_err(|e| EmailError::ConnectionFailed(format!("SMTP connection failed: {}", e)))?;

                let message_id = Uuid::new_v4().to_string();
                client
                    .send(message)
                    .await
                    .map_err(|e| EmailError::SendFailed(format!("Failed to send email: {}", e)))?;

                debug!(provider = "smtp", message_id = %message_id, "Email sent successfully");
                Ok(message_id)
            }
            EmailProvider::Console => Err(EmailError::Configuration(
                "console provider does not build SMTP messages".to_string(),
            )),
        }
    }
}

#[async_trait]
impl AdminMailer for EmailService {
    async fn mail_admins(&self, subject: &str, body: &str, fail_silently: bool) -> EmailResult<()> {
        if self.config.admins.is_empty() {
            debug!("No administrators configured, skipping admin mail");
            return Ok(());
        }

        let subject = format!("{}{}", self.config.subject_prefix, subject);

        match self.send_email(&self.config.admins, &subject, body).await {
            Ok(message_id) => {
                info!(
                    message_id = %message_id,
                    recipients = self.config.admins.len(),
                    "Admin notification mailed"
                );
                Ok(())
            }
            Err(err) if fail_silently => {
                warn!(error = %err, "Admin notification mail failed, dropping it");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn is_enabled(&self) -> bool {
        self.config.email_enabled && !self.config.admins.is_empty()
    }
}
