use chat_service::{ChatConfig, HttpStreamMessenger, StaticRealmDirectory};
use email_service::{EmailConfig, EmailService};
use error_common::{RelayError, Result};
use error_notify::{Catalog, Dispatcher, ErrorReporter, NotifyConfig};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::settings::Settings;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct ReportServer {
    /// Notification pipeline entry point
    pub reporter: Arc<ErrorReporter>,
    /// Deployment name stamped onto every report
    pub deployment_name: Arc<str>,
    pub started_at: Instant,
}

impl ReportServer {
    pub fn new(reporter: ErrorReporter, deployment_name: impl Into<Arc<str>>) -> Self {
        Self {
            reporter: Arc::new(reporter),
            deployment_name: deployment_name.into(),
            started_at: Instant::now(),
        }
    }

    /// Wire the production collaborators from the environment
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let reporter = build_reporter(settings, NotifyConfig::from_env())?;
        Ok(Self::new(reporter, settings.deployment_name.as_str()))
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Build the pipeline with SMTP admin mail and, when an error bot is configured,
/// chat delivery through the chat server's REST API.
pub fn build_reporter(settings: &Settings, notify: NotifyConfig) -> Result<ErrorReporter> {
    let email_config =
        EmailConfig::from_env().map_err(|e| RelayError::ConfigError(e.to_string()))?;
    let mailer =
        EmailService::new(email_config).map_err(|e| RelayError::ConfigError(e.to_string()))?;

    let mut dispatcher = Dispatcher::new(notify.clone(), Arc::new(mailer));

    if let Some(bot) = &notify.error_bot {
        let chat_config =
            ChatConfig::from_env().map_err(|e| RelayError::ConfigError(e.to_string()))?;
        let messenger = HttpStreamMessenger::new(&chat_config)
            .map_err(|e| RelayError::ConfigError(e.to_string()))?;
        let realms = StaticRealmDirectory::new(chat_config.default_realm());

        info!(realm = %chat_config.realm, site = %chat_config.site_url, "Chat notifications enabled for {}", bot);
        dispatcher = dispatcher.with_chat(Arc::new(realms), Arc::new(messenger));
    } else {
        info!("ERROR_BOT not set, chat notifications disabled");
    }

    let catalog = Catalog::from_map(settings.translations.clone());
    Ok(ErrorReporter::new(dispatcher, catalog))
}
