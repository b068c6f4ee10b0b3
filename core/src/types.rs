//! Shared data types for the question-to-rows pipeline.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Decoded scalar from one result cell
///
/// The executor produces these; the formatter turns every one of them
/// into a display string. SQL NULL maps to `Null` regardless of the
/// column's declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlScalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
}

/// One result row, columns in the store's return order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRow {
    /// Column name paired with its decoded value
    pub columns: Vec<(String, SqlScalar)>,
}

impl ResultRow {
    /// Look up a column by name
    pub fn get(&self, name: &str) -> Option<&SqlScalar> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }
}

/// Display form of one result row
///
/// Serializes as a JSON object whose keys keep the store's column order;
/// every value is a string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormattedRow {
    pub columns: Vec<(String, String)>,
}

impl Serialize for FormattedRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// SQL text chosen for a question, plus the message key (the normalized
/// question) that later picks the summary sentence
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuery {
    pub sql: String,
    pub message_key: String,
}

/// Final chat payload: one summary sentence and the formatted rows
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub rows: Vec<FormattedRow>,
}
