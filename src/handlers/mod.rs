//! HTTP request handlers.
//!
//! Each handler extracts request data, runs a store query and replies with
//! an `ApiResponse` envelope (or an `AppError`, which renders as one).

pub mod health;
/// Payment link lookup endpoint
pub mod payment_links;
