// Stream message types
use serde::{Deserialize, Serialize};

use crate::realm::Realm;

/// Topics longer than this are cut by the chat server, so we cut them first
pub const MAX_TOPIC_LENGTH: usize = 60;

/// A message posted by a bot to a stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamMessage {
    pub realm: Realm,
    /// Bot identity the message is posted as
    pub sender: String,
    pub stream: String,
    pub topic: String,
    pub content: String,
}

impl StreamMessage {
    pub fn new(
        realm: Realm,
        sender: impl Into<String>,
        stream: impl Into<String>,
        topic: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            realm,
            sender: sender.into(),
            stream: stream.into(),
            topic: topic.into(),
            content: content.into(),
        }
    }
}

/// Shorten `topic` to at most [`MAX_TOPIC_LENGTH`] characters, marking the cut with `...`
pub fn truncate_topic(topic: &str) -> String {
    if topic.chars().count() <= MAX_TOPIC_LENGTH {
        return topic.to_string();
    }
    let mut truncated: String = topic.chars().take(MAX_TOPIC_LENGTH - 3).collect();
    truncated.push_str("...");
    truncated
}
