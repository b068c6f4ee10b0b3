//! Error types shared across the core crate.

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required variable absent from the environment
    #[error("Missing required configuration: {0}")]
    MissingVar(String),

    /// Variable present but unparseable
    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: String, reason: String },

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Catalog validation errors
///
/// Raised once, at startup. A catalog that fails validation never serves
/// a request.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Template is empty or whitespace
    #[error("Rule '{rule}' has an empty template")]
    EmptyTemplate { rule: String },

    /// Template does not begin with the read keyword
    #[error("Rule '{rule}' template is not a read statement")]
    NotReadOnly { rule: String },

    /// Template holds more than one statement
    #[error("Rule '{rule}' template holds multiple statements")]
    MultipleStatements { rule: String },
}

/// Synthesis errors (Template and Generative strategies)
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// Network error (connection refused, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status from the completion service
    #[error("Completion service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Response did not carry the expected content
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generated text is not a single read statement
    #[error("Generated statement is not a single SELECT: {0}")]
    NotReadOnly(String),
}

impl From<reqwest::Error> for SynthesisError {
    fn from(err: reqwest::Error) -> Self {
        SynthesisError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SynthesisError {
    fn from(err: serde_json::Error) -> Self {
        SynthesisError::InvalidResponse(format!("JSON error: {}", err))
    }
}

/// Execution errors
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// Statement refused before reaching the store
    #[error("Statement rejected: {0}")]
    Rejected(String),

    /// Store-level failure (connection, syntax, decode)
    #[error("Database query failed: {0}")]
    Database(#[from] sqlx::Error),

    /// Result column of a type outside the decode set
    #[error("Unsupported column type {type_name} for column '{column}'")]
    UnsupportedType { column: String, type_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_cause() {
        let err = ConfigError::MissingVar("MIMIR_DATABASE_URL".to_string());
        assert!(err.to_string().contains("MIMIR_DATABASE_URL"));

        let err = CatalogError::NotReadOnly {
            rule: "total_spend".to_string(),
        };
        assert!(err.to_string().contains("total_spend"));

        let err = SynthesisError::Api {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert!(err.to_string().contains("429"));

        let err = ExecutionError::UnsupportedType {
            column: "payload".to_string(),
            type_name: "BYTEA".to_string(),
        };
        assert!(err.to_string().contains("BYTEA"));
    }

    #[test]
    fn test_synthesis_error_from_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = SynthesisError::from(parse_err);
        assert!(matches!(err, SynthesisError::InvalidResponse(_)));
    }
}
