//! SQL synthesis strategies
//!
//! A synthesizer turns a natural-language question (plus the catalog rule it
//! matched) into one executable SQL statement. Strategies are wrapped in an
//! enum because Rust traits with generic methods aren't dyn-compatible, and
//! the set of strategies is closed anyway.

pub mod factory;
pub mod generative;
pub mod stub;
pub mod template;

pub use factory::create_synthesizer;
pub use generative::GenerativeSynthesizer;
pub use stub::StubSynthesizer;
pub use template::TemplateSynthesizer;

use crate::catalog::IntentRule;
use crate::error::SynthesisError;
use crate::types::ResolvedQuery;

/// Unified synthesizer, dispatching to the configured strategy
#[derive(Debug, Clone)]
pub enum Synthesizer {
    Template(TemplateSynthesizer),
    Generative(GenerativeSynthesizer),
    Stub(StubSynthesizer),
}

impl Synthesizer {
    /// Produce the SQL for a question that matched `rule`
    pub async fn synthesize(
        &self,
        question: &str,
        rule: &IntentRule,
    ) -> Result<ResolvedQuery, SynthesisError> {
        match self {
            Synthesizer::Template(s) => s.synthesize(question, rule),
            Synthesizer::Generative(s) => s.synthesize(question).await,
            Synthesizer::Stub(s) => s.synthesize(question),
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        match self {
            Synthesizer::Template(_) => "template",
            Synthesizer::Generative(_) => "generative",
            Synthesizer::Stub(_) => "stub",
        }
    }
}
