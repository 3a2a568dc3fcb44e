use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use qrgen_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every variant maps to `500 {"error": <message>}`; clients cannot tell
/// failure kinds apart by status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `qrgen_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure outside the domain, e.g. a panicking handler.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!(error = %message, "Error processing request");

        let body = json!({ "error": message });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
