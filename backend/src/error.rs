//! Error handling for the Smart Farming Advisor
//!
//! Every error becomes a JSON body with a machine-readable code; no error
//! is fatal to the process and requests stay isolated from each other.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::WaterError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not decode image: {0}")]
    ImageDecode(String),

    /// Crop absent from the water tables. Structured so callers can branch
    /// on the code instead of parsing a message.
    #[error("Crop type '{0}' not found")]
    UnknownCrop(String),

    // External service errors
    #[error("Inference service error: {0}")]
    Inference(String),

    // Internal errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    Unexpected(#[from] anyhow::Error),
}

impl From<WaterError> for AppError {
    fn from(err: WaterError) -> Self {
        match err {
            WaterError::UnknownCrop(crop) => AppError::UnknownCrop(crop),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            AppError::ImageDecode(_) => (StatusCode::BAD_REQUEST, "IMAGE_DECODE_ERROR"),
            AppError::UnknownCrop(_) => (StatusCode::NOT_FOUND, "UNKNOWN_CROP"),
            AppError::Inference(_) => (StatusCode::BAD_GATEWAY, "INFERENCE_ERROR"),
            AppError::Configuration(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR"),
            AppError::Internal(_) | AppError::Unexpected(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
