use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{health, report},
    server::ReportServer,
};

/// Create health check routes
pub fn health_routes() -> Router<ReportServer> {
    Router::new().route("/health", get(health::health_check))
}

/// Create error report intake routes
pub fn report_routes() -> Router<ReportServer> {
    Router::new().route("/report_error", post(report::report_error))
}
