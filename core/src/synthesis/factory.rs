//! Synthesizer construction from configuration

use crate::config::{SynthesisConfig, SynthesisMode};
use crate::error::ConfigError;
use crate::synthesis::{GenerativeSynthesizer, StubSynthesizer, Synthesizer, TemplateSynthesizer};
use std::time::Duration;
use tracing::info;

/// Build the synthesizer selected by `config.mode`
pub fn create_synthesizer(config: &SynthesisConfig) -> Result<Synthesizer, ConfigError> {
    let synthesizer = match config.mode {
        SynthesisMode::Template => Synthesizer::Template(TemplateSynthesizer::new()),
        SynthesisMode::Generative => {
            let api_key = config
                .api_key
                .as_deref()
                .ok_or_else(|| ConfigError::MissingVar("MIMIR_LLM_API_KEY".to_string()))?;

            let generative = GenerativeSynthesizer::new(
                config.base_url.clone(),
                config.model.clone(),
                api_key,
                Duration::from_secs(config.timeout_secs),
            )?;
            Synthesizer::Generative(generative)
        }
        SynthesisMode::Stub => Synthesizer::Stub(StubSynthesizer::new()),
    };

    info!(strategy = synthesizer.strategy_name(), "synthesizer ready");
    Ok(synthesizer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL, DEFAULT_LLM_TIMEOUT_SECS};

    fn base_config(mode: SynthesisMode) -> SynthesisConfig {
        SynthesisConfig {
            mode,
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_LLM_MODEL.to_string(),
            timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
        }
    }

    #[test]
    fn test_template_factory() {
        let synthesizer = create_synthesizer(&base_config(SynthesisMode::Template)).unwrap();
        assert_eq!(synthesizer.strategy_name(), "template");
    }

    #[test]
    fn test_stub_factory() {
        let synthesizer = create_synthesizer(&base_config(SynthesisMode::Stub)).unwrap();
        assert_eq!(synthesizer.strategy_name(), "stub");
    }

    #[test]
    fn test_generative_factory_requires_key() {
        let err = create_synthesizer(&base_config(SynthesisMode::Generative)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ref name) if name == "MIMIR_LLM_API_KEY"));
    }

    #[test]
    fn test_generative_factory_with_key() {
        let mut config = base_config(SynthesisMode::Generative);
        config.api_key = Some("gsk-test".to_string());

        let synthesizer = create_synthesizer(&config).unwrap();
        assert_eq!(synthesizer.strategy_name(), "generative");
        match synthesizer {
            Synthesizer::Generative(g) => assert_eq!(g.model(), DEFAULT_LLM_MODEL),
            other => panic!("expected generative synthesizer, got {}", other.strategy_name()),
        }
    }
}
