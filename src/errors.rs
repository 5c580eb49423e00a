use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidArgument(String),
}

impl AppError {
    /// Canonical status name used in the callable error envelope.
    pub fn status_name(&self) -> &'static str {
        match self {
            AppError::Config(_) => "INTERNAL",
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        };

        let body = serde_json::json!({
            "error": {
                "status": self.status_name(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
