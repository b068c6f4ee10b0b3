//! API Handlers Module
//!
//! This module contains the request handlers for the API system.

use axum::{debug_handler, response::Json};
use sqlx::postgres::PgPool;
use std::collections::HashMap;

use mimir_core::{IntentMatcher, QueryExecutor, Synthesizer};

pub mod analytics;
pub mod chat;

pub use analytics::{
    cash_outflow, category_spend, invoice_trends, list_invoices, stats, top_vendors,
};
pub use chat::chat;

/// Represents the state of the API server
pub struct ApiState {
    /// Keyword rule matcher
    pub matcher: IntentMatcher,
    /// Configured synthesis strategy
    pub synthesizer: Synthesizer,
    /// Read-only statement executor
    pub executor: QueryExecutor,
    /// Pool for the typed analytics queries
    pub pool: PgPool,
    /// Expected `x-api-key` value; `None` leaves the API open
    pub api_key: Option<String>,
}

/// Health check endpoint
#[debug_handler]
pub async fn health_check() -> Json<HashMap<String, String>> {
    let mut response = HashMap::new();
    response.insert("status".to_string(), "healthy".to_string());
    response.insert("service".to_string(), "mimir-api".to_string());
    response.insert("version".to_string(), env!("CARGO_PKG_VERSION").to_string());
    Json(response)
}
