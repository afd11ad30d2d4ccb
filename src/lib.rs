//! Payment Link Service
//!
//! Serves merchant payment links to checkout clients by token. Every reply is
//! wrapped in the `{"error_msg", "data"}` envelope from [`response`].
//!
//! # Architecture
//!
//! - **Web Framework**: Axum
//! - **Database**: PostgreSQL with sqlx
//! - **API docs**: utoipa, served at `/api-docs/openapi.json`

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;

#[cfg(test)]
mod test_support;
