//! Error types and HTTP error response handling.
//!
//! Every error is rendered through the response envelope, so clients always
//! receive `{"error_msg": "...", "data": null}` alongside the status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Any backend failure (connectivity, constraint violation, decode error).
    ///
    /// Returns HTTP 500; details are logged and never sent to the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No live payment link matches the requested token.
    ///
    /// Returns HTTP 404.
    #[error("Payment link not found")]
    PaymentLinkNotFound,

    /// Request data failed validation.
    ///
    /// Returns HTTP 400 with the contained detail as the message.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PaymentLinkNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Status Code Mapping
///
/// - `PaymentLinkNotFound` → 404 Not Found
/// - `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "database operation failed");
                "An internal error occurred".to_string()
            }
            AppError::PaymentLinkNotFound => self.to_string(),
            AppError::InvalidRequest(ref msg) => msg.clone(),
        };

        (status, ApiResponse::<()>::err(message)).into_response()
    }
}
