//! Payment link HTTP handlers.
//!
//! - GET /api/v1/payment-links/{token} - Look up a live payment link

use crate::{
    db::DbPool,
    error::AppError,
    models::payment_link::{MAX_TOKEN_LEN, MerchantPaymentLink, PaymentLinkResponse},
    response::ApiResponse,
};
use axum::extract::{Path, State};

/// Get a payment link by its token.
///
/// # Endpoint
///
/// `GET /api/v1/payment-links/{token}`
///
/// Public: the token itself is the capability handed to the payer.
///
/// # Response
///
/// - **Success (200 OK)**: envelope with the link in `data`
/// - **Error (400)**: token longer than the column allows
/// - **Error (404)**: no live link with this token (missing or soft-deleted)
///
/// ```json
/// {
///   "error_msg": "",
///   "data": {
///     "id": 1,
///     "token": "tok_abc123",
///     "amount": "12.50",
///     "product_name": "Monthly plan",
///     "remark": null,
///     "created_at": "2025-12-20T10:00:00Z"
///   }
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/payment-links/{token}",
    tag = "payment-links",
    params(("token" = String, Path, description = "Payment link token")),
    responses(
        (status = 200, description = "Live payment link", body = crate::response::ApiResponseAny),
        (status = 400, description = "Malformed token", body = crate::response::ApiResponseAny),
        (status = 404, description = "Unknown or deleted token", body = crate::response::ApiResponseAny),
    )
)]
pub async fn get_payment_link(
    State(pool): State<DbPool>,
    Path(token): Path<String>,
) -> Result<ApiResponse<PaymentLinkResponse>, AppError> {
    // Longer tokens cannot exist in the column
    if token.chars().count() > MAX_TOKEN_LEN {
        return Err(AppError::InvalidRequest(format!(
            "token must be at most {MAX_TOKEN_LEN} characters"
        )));
    }

    let link = MerchantPaymentLink::get_by_token(&pool, &token).await?;

    Ok(ApiResponse::ok(link.into()))
}
