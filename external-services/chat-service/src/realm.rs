use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChatResult;

/// Organization scope a bot posts into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    pub string_id: String,
    /// Base URL of the realm's chat server
    pub uri: String,
}

impl Realm {
    pub fn new(string_id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            string_id: string_id.into(),
            uri: uri.into(),
        }
    }
}

/// Resolves the realm a bot identity belongs to
#[async_trait]
pub trait RealmDirectory: Send + Sync {
    async fn realm_for_bot(&self, bot: &str) -> ChatResult<Realm>;
}

/// Resolves every bot to the single configured realm
#[derive(Debug, Clone)]
pub struct StaticRealmDirectory {
    realm: Realm,
}

impl StaticRealmDirectory {
    pub fn new(realm: Realm) -> Self {
        Self { realm }
    }
}

#[async_trait]
impl RealmDirectory for StaticRealmDirectory {
    async fn realm_for_bot(&self, bot: &str) -> ChatResult<Realm> {
        debug!(bot = bot, realm = %self.realm.string_id, "Resolved bot realm");
        Ok(self.realm.clone())
    }
}
