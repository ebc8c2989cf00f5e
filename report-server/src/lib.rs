//! Error Relay Server - HTTP front end for the error notification pipeline
//!
//! Browsers and server-side exception handlers post error reports here; each
//! report is turned into an administrator email and a chat stream alert.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod settings;

// Re-export commonly used types
pub use error::ApiError;
pub use server::ReportServer;
pub use settings::Settings;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: ReportServer) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .nest("/api/v1", routes::report_routes())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(server)
}
