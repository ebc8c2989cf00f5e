use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::server::ReportServer;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub deployment: String,
    pub uptime: u64,
    /// Notification channel states
    pub channels: BTreeMap<String, String>,
}

/// Health check handler
pub async fn health_check(State(server): State<ReportServer>) -> Json<HealthResponse> {
    let dispatcher = server.reporter.dispatcher();

    let mut channels = BTreeMap::new();
    channels.insert("email".to_string(), channel_state(dispatcher.email_enabled()));
    channels.insert("chat".to_string(), channel_state(dispatcher.chat_enabled()));

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        deployment: server.deployment_name.to_string(),
        uptime: server.uptime_secs(),
        channels,
    })
}

fn channel_state(enabled: bool) -> String {
    if enabled { "enabled" } else { "disabled" }.to_string()
}
