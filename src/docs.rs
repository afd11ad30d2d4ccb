//! OpenAPI document generated with utoipa.
//!
//! Responses are described with `ApiResponseAny`, the type-erased twin of
//! `ApiResponse<T>`; both serialize to `{"error_msg", "data"}`.

use utoipa::OpenApi;

use crate::{
    handlers::health::HealthResponse, models::payment_link::PaymentLinkResponse,
    response::ApiResponseAny,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::payment_links::get_payment_link,
    ),
    components(schemas(ApiResponseAny, PaymentLinkResponse, HealthResponse)),
    tags(
        (name = "payment-links", description = "Merchant payment link lookup"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_schema_has_wire_fields() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let envelope = &doc["components"]["schemas"]["ApiResponseAny"];

        assert!(envelope["properties"]["error_msg"].is_object());
        assert!(envelope["properties"]["data"].is_object());
    }

    #[test]
    fn envelope_data_accepts_any_json_type() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let data = &doc["components"]["schemas"]["ApiResponseAny"]["properties"]["data"];

        // Typed payloads may be numbers, strings or objects
        assert!(data.get("type").is_none(), "data schema is restricted: {data}");
    }

    #[test]
    fn documents_payment_link_lookup() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let operation = &doc["paths"]["/api/v1/payment-links/{token}"]["get"];

        assert!(operation.is_object());
        assert!(operation["responses"]["404"].is_object());
        assert!(doc["components"]["schemas"]["PaymentLinkResponse"].is_object());
    }
}
