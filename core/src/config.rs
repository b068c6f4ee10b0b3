//! Environment-driven service configuration
//!
//! Required values fail fast at startup. Tests supply variables through
//! `from_lookup` instead of mutating the process environment.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:8010";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_LLM_MODEL: &str = "mixtral-8x7b";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 40;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Synthesis strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisMode {
    /// Catalog templates only; no external calls
    Template,
    /// External chat-completion service generates the SQL
    Generative,
    /// Fixed reply, for tests
    Stub,
}

impl SynthesisMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "template" | "rules" => Some(SynthesisMode::Template),
            "generative" | "llm" => Some(SynthesisMode::Generative),
            "stub" => Some(SynthesisMode::Stub),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SynthesisMode::Template => "template",
            SynthesisMode::Generative => "generative",
            SynthesisMode::Stub => "stub",
        }
    }
}

/// Settings for the synthesis strategy
#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    pub mode: SynthesisMode,
    /// Completion service base URL (e.g. https://api.groq.com/openai/v1)
    pub base_url: String,
    /// Bearer key for the completion service
    pub api_key: Option<String>,
    pub model: String,
    /// Whole-request timeout for one completion call
    pub timeout_secs: u64,
}

/// Full service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind: SocketAddr,
    /// Inbound `x-api-key` secret; unset leaves the API open
    pub api_key: Option<String>,
    pub db_max_connections: u32,
    pub synthesis: SynthesisConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an explicit variable lookup
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let get = |name: &str| get(name).filter(|value| !value.trim().is_empty());

        let database_url = get("MIMIR_DATABASE_URL")
            .or_else(|| get("DATABASE_URL"))
            .ok_or_else(|| ConfigError::MissingVar("MIMIR_DATABASE_URL".to_string()))?;

        let bind = match get("MIMIR_BIND") {
            Some(raw) => parse_value("MIMIR_BIND", &raw)?,
            None => parse_value("MIMIR_BIND", DEFAULT_BIND)?,
        };

        let db_max_connections = match get("MIMIR_DB_MAX_CONNECTIONS") {
            Some(raw) => parse_value("MIMIR_DB_MAX_CONNECTIONS", &raw)?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let mode = match get("MIMIR_SYNTH_MODE") {
            Some(raw) => SynthesisMode::parse(&raw).ok_or_else(|| ConfigError::InvalidVar {
                name: "MIMIR_SYNTH_MODE".to_string(),
                reason: format!("unknown mode '{}'", raw),
            })?,
            None => SynthesisMode::Template,
        };

        let timeout_secs = match get("MIMIR_LLM_TIMEOUT_SECS") {
            Some(raw) => parse_value("MIMIR_LLM_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };

        let synthesis = SynthesisConfig {
            mode,
            base_url: get("MIMIR_LLM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            api_key: get("MIMIR_LLM_API_KEY"),
            model: get("MIMIR_LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            timeout_secs,
        };

        // The generative strategy cannot start without its key.
        if synthesis.mode == SynthesisMode::Generative && synthesis.api_key.is_none() {
            return Err(ConfigError::MissingVar("MIMIR_LLM_API_KEY".to_string()));
        }

        Ok(AppConfig {
            database_url,
            bind,
            api_key: get("MIMIR_API_KEY"),
            db_max_connections,
            synthesis,
        })
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
