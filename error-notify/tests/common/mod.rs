#![allow(dead_code)]

use async_trait::async_trait;
use chat_service::{ChatResult, Realm, RealmDirectory, StreamMessage, StreamMessenger};
use email_service::{AdminMailer, EmailResult};
use mockall::mock;
use serde_json::{Map, Value};

mock! {
    pub Mailer {}

    #[async_trait]
    impl AdminMailer for Mailer {
        async fn mail_admins(&self, subject: &str, body: &str, fail_silently: bool) -> EmailResult<()>;
        fn is_enabled(&self) -> bool;
    }
}

mock! {
    pub Realms {}

    #[async_trait]
    impl RealmDirectory for Realms {
        async fn realm_for_bot(&self, bot: &str) -> ChatResult<Realm>;
    }
}

mock! {
    pub Messenger {}

    #[async_trait]
    impl StreamMessenger for Messenger {
        async fn send_stream_message(&self, message: &StreamMessage) -> ChatResult<()>;
    }
}

pub const ERROR_BOT: &str = "error-bot@example.com";

pub fn internal_realm() -> Realm {
    Realm::new("internal", "https://chat.example.com")
}

/// Realm directory that resolves the error bot exactly `times` times
pub fn realms_expecting(times: usize) -> MockRealms {
    let mut realms = MockRealms::new();
    realms
        .expect_realm_for_bot()
        .withf(|bot| bot == ERROR_BOT)
        .times(times)
        .returning(|_| Ok(internal_realm()));
    realms
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}
