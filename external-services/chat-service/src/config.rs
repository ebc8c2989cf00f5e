use serde::{Deserialize, Serialize};

use crate::error::{ChatError, ChatResult};
use crate::realm::Realm;

/// Chat server connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub site_url: String,
    pub realm: String,
    pub bot_api_key: String,
    pub timeout_secs: u64,
}

impl ChatConfig {
    /// Load chat configuration from environment variables
    pub fn from_env() -> ChatResult<Self> {
        let site_url = std::env::var("CHAT_SITE_URL")
            .unwrap_or_else(|_| "http://localhost:9991".to_string());

        let realm = std::env::var("CHAT_REALM").unwrap_or_else(|_| "internal".to_string());

        let bot_api_key = std::env::var("CHAT_BOT_API_KEY").unwrap_or_default();

        let timeout_secs = match std::env::var("CHAT_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ChatError::Configuration(format!("CHAT_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            Err(_) => 10,
        };

        Ok(Self {
            site_url,
            realm,
            bot_api_key,
            timeout_secs,
        })
    }

    /// Realm every bot falls back to
    pub fn default_realm(&self) -> Realm {
        Realm::new(self.realm.clone(), self.site_url.clone())
    }
}
