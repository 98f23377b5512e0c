use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::picture::ImageError;
use crate::resume::StateError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload too large: {0}")]
    UploadTooLarge(String),

    #[error("Invalid command: {0}")]
    State(#[from] StateError),

    #[error("Picture error: {0}")]
    Image(#[from] ImageError),
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            // The body limit tripped before the file could be measured.
            return AppError::UploadTooLarge(err.body_text());
        }
        AppError::Validation(format!("Malformed upload: {}", err.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UploadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PICTURE_TOO_LARGE",
                msg.clone(),
            ),
            AppError::State(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_COMMAND",
                e.to_string(),
            ),
            AppError::Image(e @ ImageError::TooLarge { .. }) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PICTURE_TOO_LARGE",
                e.to_string(),
            ),
            AppError::Image(e @ ImageError::UnsupportedType(_)) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "PICTURE_UNSUPPORTED_TYPE",
                e.to_string(),
            ),
            AppError::Image(e) => {
                tracing::error!("Picture error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PICTURE_READ_ERROR",
                    "The picture could not be read".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
