use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chat_service::{ChatResult, StaticRealmDirectory, StreamMessage, StreamMessenger};
use email_service::{AdminMailer, EmailError, EmailResult};
use error_notify::{Catalog, Dispatcher, ErrorReporter, NotifyConfig};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use report_server::{create_app, ReportServer, Settings};

#[derive(Debug, Clone, PartialEq)]
struct SentMail {
    subject: String,
    body: String,
    fail_silently: bool,
}

/// Records admin mail instead of sending it
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<SentMail>>,
    fail: bool,
    disabled: bool,
}

#[async_trait]
impl AdminMailer for RecordingMailer {
    async fn mail_admins(&self, subject: &str, body: &str, fail_silently: bool) -> EmailResult<()> {
        self.sent.lock().unwrap().push(SentMail {
            subject: subject.to_string(),
            body: body.to_string(),
            fail_silently,
        });
        if self.fail && !fail_silently {
            return Err(EmailError::ConnectionFailed("connection refused".to_string()));
        }
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

/// Records stream messages instead of posting them
#[derive(Default)]
struct RecordingMessenger {
    sent: Mutex<Vec<StreamMessage>>,
}

#[async_trait]
impl StreamMessenger for RecordingMessenger {
    async fn send_stream_message(&self, message: &StreamMessage) -> ChatResult<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

struct TestApp {
    app: Router,
    mailer: Arc<RecordingMailer>,
    messenger: Arc<RecordingMessenger>,
}

impl TestApp {
    fn new(config: NotifyConfig, catalog: Catalog, failing_mail: bool) -> Self {
        Self::with_mailer(
            config,
            catalog,
            RecordingMailer {
                fail: failing_mail,
                ..Default::default()
            },
        )
    }

    fn with_mailer(config: NotifyConfig, catalog: Catalog, mailer: RecordingMailer) -> Self {
        let mailer = Arc::new(mailer);
        let messenger = Arc::new(RecordingMessenger::default());
        let realms = StaticRealmDirectory::new(chat_service::Realm::new(
            "internal",
            "https://chat.example.com",
        ));

        let dispatcher = Dispatcher::new(config, mailer.clone())
            .with_chat(Arc::new(realms), messenger.clone());
        let server = ReportServer::new(ErrorReporter::new(dispatcher, catalog), "prod");

        Self {
            app: create_app(server),
            mailer,
            messenger,
        }
    }

    fn email_only() -> Self {
        Self::new(NotifyConfig::default(), Catalog::new(), false)
    }

    fn with_chat() -> Self {
        Self::new(
            NotifyConfig::default().with_error_bot("error-bot@example.com"),
            Catalog::new(),
            false,
        )
    }

    async fn post_report(&self, payload: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri("/api/v1/report_error")
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_health(&self) -> Value {
        let request = Request::builder()
            .uri("/health")
            .method("GET")
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn mails(&self) -> Vec<SentMail> {
        self.mailer.sent.lock().unwrap().clone()
    }

    fn stream_messages(&self) -> Vec<StreamMessage> {
        self.messenger.sent.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn test_browser_report_sends_admin_email() {
    let app = TestApp::email_only();

    let (status, body) = app
        .post_report(json!({
            "type": "browser",
            "report": {
                "user_full_name": "Alice",
                "user_email": "a@x.com",
                "message": "TypeError",
                "more_info": {"browser": "Firefox"}
            }
        }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "success", "msg": ""}));

    let mails = app.mails();
    assert_eq!(mails.len(), 1);
    assert_eq!(mails[0].subject, "Browser error for Alice (a@x.com) on prod deployment");
    assert!(mails[0].body.contains("\nAdditional information:\n  browser: Firefox"));
    assert!(!mails[0].fail_silently);
    assert!(app.stream_messages().is_empty());
}

#[tokio::test]
async fn test_server_report_reaches_both_channels() {
    let app = TestApp::with_chat();

    let (status, _) = app
        .post_report(json!({
            "type": "server",
            "report": {"node": "n1", "message": "NPE", "REMOTE_ADDR": "10.0.0.7"}
        }))
        .await;

    assert_eq!(status, StatusCode::OK);

    let mails = app.mails();
    assert_eq!(mails.len(), 1);
    assert_eq!(mails[0].subject, "n1: NPE");
    assert!(mails[0].fail_silently);
    assert!(mails[0].body.contains("- REMOTE_ADDR: \"10.0.0.7\"\n"));

    let messages = app.stream_messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].stream, "errors");
    assert_eq!(messages[0].topic, "n1: NPE");
    assert_eq!(messages[0].sender, "error-bot@example.com");
    assert_eq!(messages[0].realm.string_id, "internal");
}

#[tokio::test]
async fn test_invalid_type_is_rejected() {
    let app = TestApp::with_chat();

    let (status, body) = app
        .post_report(json!({"type": "bogus", "report": {}}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"result": "error", "msg": "Invalid type parameter"}));
    assert!(app.mails().is_empty());
    assert!(app.stream_messages().is_empty());
}

#[tokio::test]
async fn test_invalid_type_message_uses_translations() {
    let catalog = Catalog::new().with_message("Invalid type parameter", "Type de rapport invalide");
    let app = TestApp::new(NotifyConfig::default(), catalog, false);

    let (_, body) = app.post_report(json!({"type": "", "report": {}})).await;

    assert_eq!(body["msg"], "Type de rapport invalide");
}

#[tokio::test]
async fn test_delivery_failure_still_reports_success() {
    let app = TestApp::new(NotifyConfig::default(), Catalog::new(), true);

    let (status, body) = app
        .post_report(json!({"type": "browser", "report": {"message": "boom"}}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "success");
    assert_eq!(app.mails().len(), 1);
}

#[tokio::test]
async fn test_malformed_payload_is_bad_request() {
    let app = TestApp::email_only();

    let (status, body) = app.post_report(json!({"report": {}})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["result"], "error");
    assert!(app.mails().is_empty());
}

#[tokio::test]
async fn test_health_reports_channels() {
    let app = TestApp::with_chat();

    let body = app.get_health().await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["deployment"], "prod");
    assert_eq!(body["channels"]["chat"], "enabled");
    assert_eq!(body["channels"]["email"], "enabled");
}

#[tokio::test]
async fn test_health_reports_disabled_email() {
    let mailer = RecordingMailer {
        disabled: true,
        ..Default::default()
    };
    let app = TestApp::with_mailer(NotifyConfig::default(), Catalog::new(), mailer);

    let body = app.get_health().await;

    assert_eq!(body["channels"]["email"], "disabled");
    assert_eq!(body["channels"]["chat"], "disabled");
}

#[tokio::test]
async fn test_yaml_translations_reach_invalid_type_reply() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "deployment_name: prod\ntranslations:\n  \"Invalid type parameter\": \"Typ ungueltig\""
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let settings = Settings::load(Some(&path)).unwrap();
    let app = TestApp::new(
        NotifyConfig::default(),
        Catalog::from_map(settings.translations),
        false,
    );

    let (status, body) = app.post_report(json!({"type": "bogus", "report": {}})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"result": "error", "msg": "Typ ungueltig"}));
}
