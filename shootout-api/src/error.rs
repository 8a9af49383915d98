//! Error types for shootout-api
//!
//! Every error leaves the service as `{"error": {"code", "message"}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// shootout-common error
    #[error("Common error: {0}")]
    Common(#[from] shootout_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Common(shootout_common::Error::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg)
            }
            ApiError::Common(ref err) => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "COMMON_ERROR",
                    err.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Turn a missing root entity into a 404
pub trait OrNotFound<T> {
    fn or_not_found(self, what: &str, id: i64) -> ApiResult<T>;
}

impl<T> OrNotFound<T> for Option<T> {
    fn or_not_found(self, what: &str, id: i64) -> ApiResult<T> {
        self.ok_or_else(|| ApiError::NotFound(format!("{} {} not found", what, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_errors_map_to_status() {
        let invalid =
            ApiError::from(shootout_common::Error::InvalidInput("x".into())).into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let internal =
            ApiError::from(shootout_common::Error::Internal("orphan".into())).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_or_not_found() {
        let missing: Option<i64> = None;
        assert!(matches!(
            missing.or_not_found("Pedal", 7),
            Err(ApiError::NotFound(msg)) if msg == "Pedal 7 not found"
        ));
        assert_eq!(Some(3).or_not_found("Pedal", 7).unwrap(), 3);
    }
}
