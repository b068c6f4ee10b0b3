//! Mimir Core Module
//!
//! The core module turns natural-language questions about financial records
//! into SQL, runs it read-only against PostgreSQL, and formats the results.
//! The HTTP surface lives in `mimir-api`; everything here is transport-free.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod executor;
pub mod format;
pub mod matcher;
pub mod statement;
pub mod synthesis;
pub mod types;

// Re-export the types the API crate and binary reach for most often
pub use catalog::{Catalog, IntentRule, Predicate, FALLBACK_MESSAGE};
pub use config::{AppConfig, SynthesisConfig, SynthesisMode};
pub use error::{CatalogError, ConfigError, ExecutionError, SynthesisError};
pub use executor::QueryExecutor;
pub use format::{format_response, format_scalar};
pub use matcher::IntentMatcher;
pub use synthesis::{create_synthesizer, Synthesizer};
pub use types::{ChatResponse, FormattedRow, ResolvedQuery, ResultRow, SqlScalar};
