//! Mimir API Module
//!
//! The API module provides the HTTP endpoints for the Mimir system: the
//! chat pipeline, the typed analytics queries, and the health probe.

pub mod error;
pub mod handlers;
pub mod models;
pub mod server;

pub use error::ChatError;
pub use handlers::*;
pub use models::*;
pub use server::*;
