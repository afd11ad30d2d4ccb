//! HTTP router assembly.

use axum::{Json, Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{db::DbPool, docs::ApiDoc, handlers};

/// Build the application router with all routes and middleware.
pub fn app(pool: DbPool) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/v1/payment-links/{token}",
            get(handlers::payment_links::get_payment_link),
        )
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
        // Share database pool with all handlers via State extraction
        .with_state(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use sqlx::PgPool;
    use tower::ServiceExt;

    async fn get_json(pool: PgPool, uri: &str) -> (StatusCode, Value) {
        let response = app(pool)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[sqlx::test]
    async fn health_reports_connected_database(pool: PgPool) {
        let (status, body) = get_json(pool, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error_msg"], "");
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["database"], "connected");
    }

    #[sqlx::test]
    async fn serves_openapi_document(pool: PgPool) {
        let (status, body) = get_json(pool, "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/v1/payment-links/{token}"]["get"].is_object());
        assert!(body["components"]["schemas"]["ApiResponseAny"].is_object());
    }
}
