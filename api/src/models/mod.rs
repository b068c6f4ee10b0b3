//! Request and response models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Chat request body. `query` is accepted as an alias for `question`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default, alias = "query")]
    pub question: Option<String>,
}

/// Settings the HTTP layer needs; everything else stays in core
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: SocketAddr,
}

/// GET /stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub invoice_count: i64,
    pub vendor_count: i64,
    pub total_spend: f64,
    pub average_invoice: f64,
}

/// One row of GET /vendors/top
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorSpend {
    pub vendor: String,
    pub spend: f64,
}

/// One row of GET /spend/categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    pub spend: f64,
}

/// One row of GET /cash-outflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashOutflow {
    pub date: NaiveDate,
    pub amount: f64,
}

/// One row of GET /invoices/trends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub invoice_count: i64,
    pub total_amount: f64,
}

/// One row of GET /invoices. Date and status are nullable in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub vendor: String,
    pub number: String,
    pub invoice_date: Option<NaiveDate>,
    pub total: f64,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopVendorsParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendsParams {
    pub months: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceListParams {
    pub search: Option<String>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_question_field() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"question": "What is the total spend?"}"#).unwrap();
        assert_eq!(request.question.as_deref(), Some("What is the total spend?"));
    }

    #[test]
    fn test_chat_request_query_alias() {
        let request: ChatRequest = serde_json::from_str(r#"{"query": "top vendors"}"#).unwrap();
        assert_eq!(request.question.as_deref(), Some("top vendors"));
    }

    #[test]
    fn test_chat_request_missing_field() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.question, None);
    }
}
