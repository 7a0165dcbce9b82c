//! Error types for the Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::validation::Violation;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The referenced book id does not exist in the store.
    #[error("Book not found")]
    NotFound,

    /// One or more field rules were violated by the request payload.
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Body of 404 and 500 responses
#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of 400 validation-failure responses: one entry per violated rule
#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse {
                    message: "Book not found".to_string(),
                }),
            )
                .into_response(),
            AppError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    errors: violations.into_iter().map(|v| v.message).collect(),
                }),
            )
                .into_response(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                internal_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_response()
            }
        }
    }
}

// Storage faults surface with no internal detail; the cause is logged above.
fn internal_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse {
            message: "Internal server error".to_string(),
        }),
    )
        .into_response()
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
