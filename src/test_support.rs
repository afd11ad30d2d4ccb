//! Fixtures for database-backed tests.
//!
//! Link issuance lives outside this service, so tests seed rows directly.

use rust_decimal::Decimal;
use sqlx::PgExecutor;

use crate::models::payment_link::MerchantPaymentLink;

pub fn dec(value: &str) -> Decimal {
    value.parse().expect("valid decimal literal")
}

/// Column values for a row inserted by a test.
#[derive(Debug, Clone)]
pub struct NewPaymentLink<'a> {
    pub merchant_api_key_id: i64,
    pub token: &'a str,
    pub amount: Decimal,
    pub product_name: &'a str,
    pub remark: Option<&'a str>,
}

impl<'a> NewPaymentLink<'a> {
    pub fn with_token(token: &'a str) -> Self {
        Self {
            merchant_api_key_id: 1,
            token,
            amount: dec("10.00"),
            product_name: "Test product",
            remark: None,
        }
    }
}

pub async fn insert_payment_link<'e, E>(
    executor: E,
    link: &NewPaymentLink<'_>,
) -> Result<MerchantPaymentLink, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, MerchantPaymentLink>(
        r#"
        INSERT INTO merchant_payment_links
            (merchant_api_key_id, token, amount, product_name, remark)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, merchant_api_key_id, token, amount, product_name, remark,
                  created_at, deleted_at
        "#,
    )
    .bind(link.merchant_api_key_id)
    .bind(link.token)
    .bind(link.amount)
    .bind(link.product_name)
    .bind(link.remark)
    .fetch_one(executor)
    .await
}

pub async fn soft_delete_payment_link<'e, E>(executor: E, id: u64) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let id = i64::try_from(id).expect("test ids fit in BIGINT");

    sqlx::query("UPDATE merchant_payment_links SET deleted_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}
