//! Stub strategy for tests

use crate::error::SynthesisError;
use crate::types::ResolvedQuery;

/// Returns a fixed statement regardless of the question
#[derive(Debug, Clone)]
pub struct StubSynthesizer {
    sql: String,
}

impl StubSynthesizer {
    pub fn new() -> Self {
        Self {
            sql: "SELECT 1 AS ok".to_string(),
        }
    }

    pub fn with_sql(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }

    pub fn synthesize(&self, question: &str) -> Result<ResolvedQuery, SynthesisError> {
        Ok(ResolvedQuery {
            sql: self.sql.clone(),
            message_key: question.to_string(),
        })
    }
}

impl Default for StubSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
