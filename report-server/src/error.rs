use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use error_notify::{NotifyError, ReportResponse};
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

/// Main API error enum
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("Bad request: {message}")]
    BadRequest { message: String },
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Notify(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Notify(e) => e.error_type(),
            ApiError::BadRequest { .. } => "bad_request",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        // Log the error with correlation ID
        if status_code.is_client_error() {
            warn!(
                error_id = %error_id,
                error_type = %self.error_type(),
                status_code = %status_code.as_u16(),
                error = %self,
                "Rejected API request"
            );
        } else {
            error!(
                error_id = %error_id,
                error_type = %self.error_type(),
                status_code = %status_code.as_u16(),
                error = %self,
                "API error occurred"
            );
        }

        (status_code, Json(ReportResponse::error(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_type_maps_to_bad_request() {
        let err = ApiError::from(NotifyError::InvalidType {
            kind: "bogus".to_string(),
            message: "Invalid type parameter".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), "invalid_type");
        assert_eq!(err.to_string(), "Invalid type parameter");
    }

    #[test]
    fn test_delivery_failure_maps_to_bad_gateway() {
        let err = ApiError::from(NotifyError::Email(email_service::EmailError::SendFailed(
            "timeout".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_bad_request_response_status() {
        let response = ApiError::bad_request("missing field `type`").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
