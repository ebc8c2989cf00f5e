use std::collections::HashMap;

/// Message catalog for user-visible strings.
///
/// Message ids match case-insensitively; configuration loaders lowercase map keys.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(messages: HashMap<String, String>) -> Self {
        Self {
            messages: messages
                .into_iter()
                .map(|(msgid, text)| (msgid.to_lowercase(), text))
                .collect(),
        }
    }

    pub fn with_message(mut self, msgid: &str, text: impl Into<String>) -> Self {
        self.messages.insert(msgid.to_lowercase(), text.into());
        self
    }

    /// Translated text for `msgid`, or `msgid` itself when no translation exists
    pub fn translate(&self, msgid: &str) -> String {
        self.messages
            .get(&msgid.to_lowercase())
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }
}
