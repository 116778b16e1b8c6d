// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::generator::GenerationError;

pub const MISSING_FIELD_MESSAGE: &str = "Missing 'question' or 'age' in request";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing 'question' or 'age' in request")]
    MissingField,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the caller. Generation failures never expose their cause.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingField => MISSING_FIELD_MESSAGE,
            AppError::Generation(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Generation(err) = &self {
            tracing::error!(error = %err, "An error occurred while generating a reply");
        }
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
