//! Merchant payment link model and API response type.
//!
//! This module defines:
//! - `MerchantPaymentLink`: database entity for a token-addressed payment link
//! - `PaymentLinkResponse`: public view returned to checkout clients

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgExecutor;
use utoipa::ToSchema;

use crate::error::AppError;

/// Longest token the `token` column can hold.
pub const MAX_TOKEN_LEN: usize = 64;

/// Represents a payment link record from the database.
///
/// # Database Table
///
/// Maps to `merchant_payment_links`. Each link:
/// - Belongs to one merchant API key (via `merchant_api_key_id`)
/// - Is addressed externally by a globally unique `token`
/// - Requests a fixed `amount` stored as `NUMERIC(20,2)`
///
/// # Soft Delete
///
/// A non-null `deleted_at` marks the link as logically deleted. The row is
/// kept, its token stays reserved, and every read path filters it out with
/// `deleted_at IS NULL`.
///
/// Postgres has no unsigned integers, so ids are stored as `BIGINT` and
/// converted on decode.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MerchantPaymentLink {
    #[sqlx(try_from = "i64")]
    pub id: u64,

    /// Owning merchant API key. The key itself lives in another subsystem.
    #[sqlx(try_from = "i64")]
    pub merchant_api_key_id: u64,

    /// External identifier, at most 64 characters
    pub token: String,

    /// Requested amount, never more than 2 fractional digits
    pub amount: Decimal,

    /// At most 30 characters
    pub product_name: String,

    /// At most 100 characters
    pub remark: Option<String>,

    pub created_at: DateTime<Utc>,

    pub deleted_at: Option<DateTime<Utc>>,
}

impl MerchantPaymentLink {
    /// Fetch the live payment link whose token equals `token` exactly.
    ///
    /// Accepts any Postgres executor: a pool, a connection or an open
    /// transaction. The read runs under whatever isolation that handle
    /// already has.
    ///
    /// # Errors
    ///
    /// - `PaymentLinkNotFound`: no live row has this token (including rows
    ///   that exist but are soft-deleted)
    /// - `Database`: any other backend failure, passed through unchanged
    pub async fn get_by_token<'e, E>(executor: E, token: &str) -> Result<Self, AppError>
    where
        E: PgExecutor<'e>,
    {
        let link = sqlx::query_as::<_, MerchantPaymentLink>(
            r#"
            SELECT id, merchant_api_key_id, token, amount, product_name, remark,
                   created_at, deleted_at
            FROM merchant_payment_links
            WHERE token = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(token)
        .fetch_optional(executor)
        .await?;

        link.ok_or_else(|| {
            tracing::debug!(token = %redact_token(token), "no live payment link for token");
            AppError::PaymentLinkNotFound
        })
    }
}

/// Shorten a token for logs; the full value grants access to the link.
fn redact_token(token: &str) -> String {
    if token.chars().count() <= 8 {
        return "***".to_string();
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{prefix}***")
}

/// Response body for payment link endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "token": "tok_abc123",
///   "amount": "12.50",
///   "product_name": "Monthly plan",
///   "remark": null,
///   "created_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentLinkResponse {
    pub id: u64,
    #[schema(example = "tok_abc123")]
    pub token: String,
    #[schema(example = "12.50")]
    pub amount: Decimal,
    pub product_name: String,
    pub remark: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Convert a database record to the public response.
///
/// Drops `merchant_api_key_id` and `deleted_at`, which are internal.
impl From<MerchantPaymentLink> for PaymentLinkResponse {
    fn from(link: MerchantPaymentLink) -> Self {
        Self {
            id: link.id,
            token: link.token,
            amount: link.amount,
            product_name: link.product_name,
            remark: link.remark,
            created_at: link.created_at,
        }
    }
}
