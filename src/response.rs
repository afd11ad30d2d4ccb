//! Uniform response envelope for every API reply.
//!
//! All bodies share one wire shape:
//!
//! ```json
//! {
//!   "error_msg": "",
//!   "data": { ... }
//! }
//! ```
//!
//! A non-empty `error_msg` is the only error signal carried by the body;
//! HTTP status codes are chosen by the caller (see `AppError`).

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Generic response envelope.
///
/// Build it with [`ApiResponse::ok`], [`ApiResponse::ok_empty`] or
/// [`ApiResponse::err`]. Setting both fields at once is a caller error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    /// Empty on success
    pub error_msg: String,

    /// Payload, `null` when absent
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            error_msg: String::new(),
            data: Some(data),
        }
    }

    /// Successful response with `data: null`.
    pub fn ok_empty() -> Self {
        Self {
            error_msg: String::new(),
            data: None,
        }
    }

    /// Error response with `data: null`.
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            error_msg: msg.into(),
            data: None,
        }
    }

    /// True when `error_msg` is non-empty, the only error signal on the wire.
    pub fn is_error(&self) -> bool {
        !self.error_msg.is_empty()
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Convert into the type-erased form used for API documentation.
    ///
    /// # Errors
    ///
    /// Fails only if `T`'s `Serialize` impl fails (e.g. a map with
    /// non-string keys).
    pub fn erase(self) -> serde_json::Result<ApiResponseAny> {
        let data = self.data.map(serde_json::to_value).transpose()?;
        Ok(ApiResponseAny {
            error_msg: self.error_msg,
            data,
        })
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Type-erased envelope for schema generation.
///
/// utoipa cannot describe an open generic, so OpenAPI responses reference
/// this type instead of `ApiResponse<T>`. It serializes to the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ApiResponseAny {
    /// Empty on success
    #[schema(example = "")]
    pub error_msg: String,

    /// Payload of any JSON type, `null` when absent
    #[schema(value_type = Value)]
    pub data: Option<serde_json::Value>,
}
