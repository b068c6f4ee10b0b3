//! Generative strategy: OpenAI-compatible chat-completion backend
//!
//! Speaks the `/chat/completions` protocol, so any compatible endpoint
//! (Groq, OpenAI, a local proxy) works by pointing `base_url` at it.

use crate::error::{ConfigError, SynthesisError};
use crate::statement;
use crate::types::ResolvedQuery;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

const SYSTEM_PROMPT: &str = "You are a helpful SQL data assistant.";

/// Sampling temperature for completion requests
const TEMPERATURE: f64 = 0.2;

/// Synthesizer backed by an external chat-completion service
#[derive(Debug, Clone)]
pub struct GenerativeSynthesizer {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GenerativeSynthesizer {
    /// Build the synthesizer and its HTTP client. The timeout bounds the
    /// whole request, connect included.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the completion service for one SELECT answering `question`
    pub async fn synthesize(&self, question: &str) -> Result<ResolvedQuery, SynthesisError> {
        let url = completions_url(&self.base_url);
        let request_body = self.build_request(question);

        debug!(model = %self.model, "requesting SQL completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "completion service rejected the request");
            return Err(SynthesisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let sql = extract_sql(&body)?;
        ensure_select(&sql)?;

        Ok(ResolvedQuery {
            sql,
            message_key: question.to_string(),
        })
    }

    fn build_request(&self, question: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": build_prompt(question)},
            ],
            "temperature": TEMPERATURE,
        })
    }
}

pub fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

fn build_prompt(question: &str) -> String {
    format!(
        "You are a data analyst. Generate ONLY a valid SQL SELECT statement (PostgreSQL dialect) \
         to answer the following user question based on tables: Invoice, Vendor, LineItem, Customer, Payment.\n\n\
         Question: {}\n\n\
         Only return the SQL query, no explanations, no markdown.",
        question
    )
}

/// Pull the SQL out of a chat-completion response body
pub fn extract_sql(body: &str) -> Result<String, SynthesisError> {
    let response_json: Value = serde_json::from_str(body)?;

    let content = response_json["choices"]
        .get(0)
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .ok_or_else(|| {
            SynthesisError::InvalidResponse(
                "Missing choices[0].message.content in response".to_string(),
            )
        })?;

    Ok(content.trim().to_string())
}

/// Reject anything that is not a single SELECT statement
pub fn ensure_select(sql: &str) -> Result<(), SynthesisError> {
    if !statement::is_read_only(sql) {
        return Err(SynthesisError::NotReadOnly(sql.to_string()));
    }
    if !statement::is_single_statement(sql) {
        return Err(SynthesisError::NotReadOnly(sql.to_string()));
    }
    Ok(())
}
