//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and machine-readable code.
///
/// # Error Categories
///
/// - **Authentication Errors**: missing, malformed or unknown API keys (401)
/// - **Resource Errors**: requested course or lesson not found (404)
/// - **Validation Errors**: malformed path parameters (400)
/// - **Database Errors**: any sqlx::Error from the Postgres catalog (500)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No `Authorization` header, or an empty one.
    #[error("Authorization header is required")]
    MissingApiKey,

    /// Header present but not of the form `Bearer <key>`.
    #[error("Authorization header must be in format: Bearer YOUR_API_KEY")]
    InvalidAuthFormat,

    /// Well-formed header carrying a key outside the credential set.
    #[error("Invalid API key provided")]
    InvalidApiKey,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Lesson not found")]
    LessonNotFound,

    /// Request parameters are invalid.
    ///
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),

    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Machine-readable code placed in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingApiKey => "MISSING_API_KEY",
            AppError::InvalidAuthFormat => "INVALID_AUTH_FORMAT",
            AppError::InvalidApiKey => "INVALID_API_KEY",
            AppError::CourseNotFound => "COURSE_NOT_FOUND",
            AppError::LessonNotFound => "LESSON_NOT_FOUND",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::Database(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingApiKey | AppError::InvalidAuthFormat | AppError::InvalidApiKey => {
                StatusCode::UNAUTHORIZED
            }
            AppError::CourseNotFound | AppError::LessonNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error envelope returned by every failing endpoint.
///
/// ```json
/// {
///   "error": {
///     "code": "INVALID_API_KEY",
///     "message": "Invalid API key provided"
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `MISSING_API_KEY`, `INVALID_AUTH_FORMAT`, `INVALID_API_KEY`,
    /// `COURSE_NOT_FOUND`, `LESSON_NOT_FOUND`, `INVALID_REQUEST`, `INTERNAL_ERROR`
    pub code: String,

    /// Human-readable explanation
    pub message: String,
}

/// Path parameters that fail to parse become a 400 envelope instead of
/// axum's plain-text rejection.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// Handlers and middleware return `Result<T, AppError>` and axum turns the
/// error side into a status code plus the [`ErrorResponse`] envelope.
/// Database errors are logged and replaced by a generic message so no
/// internals reach the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match self {
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "database error");
                "An internal error occurred".to_string()
            }
            AppError::InvalidRequest(ref msg) => msg.clone(),
            _ => self.to_string(),
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}
