use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{error::ApiError, server::ReportServer};
use error_notify::ReportResponse;

/// Error report submission
#[derive(Debug, Deserialize)]
pub struct ReportErrorRequest {
    /// `browser` or `server`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub report: Map<String, Value>,
}

/// Accept an error report and notify administrators
pub async fn report_error(
    State(server): State<ReportServer>,
    payload: Result<Json<ReportErrorRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    debug!(kind = %request.kind, fields = request.report.len(), "Error report received");

    let response = server
        .reporter
        .report_error(&server.deployment_name, &request.kind, request.report)
        .await?;

    Ok(Json(response))
}
