//! Data models representing database entities.

/// Merchant payment link model
pub mod payment_link;
