//! Health check endpoint for service monitoring.

use crate::{db::DbPool, error::AppError, response::ApiResponse};
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Health check payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// Runs `SELECT 1` against the pool.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "error_msg": "",
///   "data": {
///     "status": "healthy",
///     "database": "connected",
///     "timestamp": "2025-12-21T19:00:00Z"
///   }
/// }
/// ```
///
/// If the database is unreachable the standard 500 envelope is returned.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and database are reachable", body = crate::response::ApiResponseAny),
        (status = 500, description = "Database is unreachable", body = crate::response::ApiResponseAny),
    )
)]
pub async fn health_check(
    State(pool): State<DbPool>,
) -> Result<ApiResponse<HealthResponse>, AppError> {
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        timestamp: Utc::now(),
    }))
}
