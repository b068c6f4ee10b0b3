//! Template strategy: the catalog rule already carries the SQL

use crate::catalog::IntentRule;
use crate::error::SynthesisError;
use crate::types::ResolvedQuery;

/// Copies the matched rule's template verbatim. Never fails and never
/// leaves the process.
#[derive(Debug, Clone, Default)]
pub struct TemplateSynthesizer;

impl TemplateSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(
        &self,
        question: &str,
        rule: &IntentRule,
    ) -> Result<ResolvedQuery, SynthesisError> {
        Ok(ResolvedQuery {
            sql: rule.sql.to_string(),
            message_key: question.to_string(),
        })
    }
}
