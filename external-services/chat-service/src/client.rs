use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::ChatConfig;
use crate::error::{ChatError, ChatResult};
use crate::message::{truncate_topic, StreamMessage};

/// Delivery of bot messages to chat streams
#[async_trait]
pub trait StreamMessenger: Send + Sync {
    async fn send_stream_message(&self, message: &StreamMessage) -> ChatResult<()>;
}

/// Posts stream messages to the chat server's REST API
pub struct HttpStreamMessenger {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    result: String,
    #[serde(default)]
    msg: String,
}

impl HttpStreamMessenger {
    pub fn new(config: &ChatConfig) -> ChatResult<Self> {
        if config.bot_api_key.is_empty() {
            return Err(ChatError::Configuration("CHAT_BOT_API_KEY is not set".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.bot_api_key.clone(),
        })
    }
}

#[async_trait]
impl StreamMessenger for HttpStreamMessenger {
    async fn send_stream_message(&self, message: &StreamMessage) -> ChatResult<()> {
        let url = format!("{}/api/v1/messages", message.realm.uri.trim_end_matches('/'));
        let topic = truncate_topic(&message.topic);
        let params = [
            ("type", "stream"),
            ("to", message.stream.as_str()),
            ("topic", topic.as_str()),
            ("content", message.content.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&message.sender, Some(&self.api_key))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let parsed = serde_json::from_str::<ApiResponse>(&text).ok();

        match parsed {
            Some(body) if status.is_success() && body.result == "success" => {
                debug!(
                    realm = %message.realm.string_id,
                    stream = %message.stream,
                    "Stream message delivered"
                );
                Ok(())
            }
            Some(body) => Err(ChatError::Rejected {
                status: status.as_u16(),
                message: body.msg,
            }),
            None => Err(ChatError::Rejected {
                status: status.as_u16(),
                message: text,
            }),
        }
    }
}
