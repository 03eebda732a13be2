//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and `{"error": "..."}` bodies so
//! every endpoint reports failures the same way.
//!
//! Client errors carry their message through unchanged. Server-side failures
//! are logged in full and answered with a generic message. Extractor
//! rejections are converted here too, so a malformed request never gets
//! axum's plain-text error body.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotbook_core::{
    errors::BookingError,
    validation::{MSG_INVALID_DATE, MSG_MISSING_FIELDS},
};

/// Message returned for any failure that is not the client's fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use slotbook_api::middleware::error_handling::AppError;
/// use slotbook_core::{errors::BookingError, validation};
///
/// async fn handler(date: Option<String>) -> Result<Json<String>, AppError> {
///     let date = validation::validate_date_query(date.as_deref())?;
///     Ok(Json(date.to_string()))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if self.0.is_client_error() {
            self.0.to_string()
        } else {
            tracing::error!(error = ?self.0, "Request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Allows `?` on `BookingResult` inside handlers.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// A booking body that is not a JSON object of the expected shape (wrong
/// content type, malformed JSON, unusable field types) is reported like any
/// other incomplete booking.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(status = %rejection.status(), reason = %rejection.body_text(), "Rejected booking body");
        AppError(BookingError::Validation(MSG_MISSING_FIELDS.to_string()))
    }
}

/// An availability query string that cannot be decoded (for example a
/// repeated `date` key) is reported as a bad date.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(status = %rejection.status(), reason = %rejection.body_text(), "Rejected availability query");
        AppError(BookingError::Validation(MSG_INVALID_DATE.to_string()))
    }
}
