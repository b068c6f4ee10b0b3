//! Keyword predicates mapped to SQL templates
//!
//! Pure data structures for question routing. No IO, no randomness, no
//! side effects. Order carries meaning: resolution is first-match-wins,
//! so specific rules sit before broad ones and the always-true fallback
//! sits last.

use crate::error::CatalogError;
use crate::statement;

/// Keyword predicate over a normalized (trimmed, case-folded) question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Every keyword must appear
    AllOf(&'static [&'static str]),
    /// At least one keyword must appear
    AnyOf(&'static [&'static str]),
    /// Matches any question; the fallback marker
    Always,
}

impl Predicate {
    /// Evaluate against a normalized question
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Predicate::AllOf(keywords) => keywords.iter().all(|k| normalized.contains(k)),
            Predicate::AnyOf(keywords) => keywords.iter().any(|k| normalized.contains(k)),
            Predicate::Always => true,
        }
    }
}

/// One catalog entry: predicate, SQL template, summary sentence
///
/// Templates are parameterless single read statements against the
/// canonical schema (Invoice, Vendor, LineItem, Customer, Payment).
/// The sentence is this intent's summary, used when no message keyword
/// in the question itself picks one (see the formatter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    /// Stable name, used in logs
    pub name: &'static str,
    pub predicate: Predicate,
    pub sql: &'static str,
    pub message: &'static str,
}

/// Generic sentence for questions no keyword rule understands
pub const FALLBACK_MESSAGE: &str = "I understand you're asking about the data. Could you be more specific? You can ask about spending categories, vendors, or invoice trends.";

const TOP_VENDORS_5_SQL: &str = r#"
SELECT v.name AS vendor, COALESCE(SUM(i.total), 0) AS spend
FROM "Invoice" i
JOIN "Vendor" v ON v.id = i."vendorId"
GROUP BY v.name
ORDER BY spend DESC
LIMIT 5"#;

const TOP_VENDORS_10_SQL: &str = r#"
SELECT v.name AS vendor, COALESCE(SUM(i.total), 0) AS spend
FROM "Invoice" i
JOIN "Vendor" v ON v.id = i."vendorId"
GROUP BY v.name
ORDER BY spend DESC
LIMIT 10"#;

const MONTHLY_SPEND_SQL: &str = r#"
SELECT to_char(date_trunc('month', i."invoiceDate"), 'YYYY-MM') AS month,
       COALESCE(SUM(i.total), 0) AS total_spend
FROM "Invoice" i
WHERE i."invoiceDate" IS NOT NULL
GROUP BY 1
ORDER BY 1"#;

const TOTAL_SPEND_SQL: &str = r#"
SELECT COALESCE(SUM(total), 0) AS total_spend
FROM "Invoice""#;

const CATEGORY_SPEND_SQL: &str = r#"
SELECT COALESCE(li.category, 'Uncategorized') AS category,
       COALESCE(SUM(li."totalPrice"), 0) AS spend
FROM "LineItem" li
GROUP BY 1
ORDER BY spend DESC"#;

const AVERAGE_INVOICE_SQL: &str = r#"
SELECT COALESCE(AVG(total), 0) AS average_invoice
FROM "Invoice""#;

const MONTHLY_INVOICES_SQL: &str = r#"
SELECT to_char(date_trunc('month', i."invoiceDate"), 'YYYY-MM') AS month,
       COUNT(*) AS invoice_count,
       COALESCE(SUM(i.total), 0) AS total_amount
FROM "Invoice" i
WHERE i."invoiceDate" IS NOT NULL
GROUP BY 1
ORDER BY 1"#;

const TOP_CUSTOMERS_SQL: &str = r#"
SELECT c.name AS customer, COALESCE(SUM(i.total), 0) AS billed
FROM "Invoice" i
JOIN "Customer" c ON c.id = i."customerId"
GROUP BY c.name
ORDER BY billed DESC
LIMIT 10"#;

const TOP_PRODUCTS_SQL: &str = r#"
SELECT li.description AS product, COALESCE(SUM(li."totalPrice"), 0) AS spend
FROM "LineItem" li
GROUP BY li.description
ORDER BY spend DESC
LIMIT 10"#;

const STATUS_BREAKDOWN_SQL: &str = r#"
SELECT COALESCE(status, 'unknown') AS status, COUNT(*) AS invoice_count
FROM "Invoice"
GROUP BY 1
ORDER BY invoice_count DESC"#;

const CASH_OUTFLOW_SQL: &str = r#"
SELECT p."dueDate" AS due_date, COALESCE(SUM(i.total), 0) AS amount
FROM "Payment" p
JOIN "Invoice" i ON i.id = p."invoiceId"
GROUP BY 1
ORDER BY 1"#;

const RECENT_INVOICES_SQL: &str = r#"
SELECT v.name AS vendor, i.number AS invoice_number, i."invoiceDate" AS invoice_date,
       COALESCE(i.total, 0) AS amount, COALESCE(i.status, 'unknown') AS status
FROM "Invoice" i
JOIN "Vendor" v ON v.id = i."vendorId"
ORDER BY i."invoiceDate" DESC NULLS LAST
LIMIT 10"#;

const FALLBACK_SQL: &str = r#"
SELECT v.name AS vendor, COALESCE(SUM(i.total), 0) AS spend
FROM "Invoice" i
JOIN "Vendor" v ON v.id = i."vendorId"
GROUP BY v.name
ORDER BY spend DESC
LIMIT 3"#;

/// The standard rule set, most specific first.
///
/// Priority order (first match wins):
/// 1. "top 5" vendor questions before the broad vendor rule
/// 2. "total spend" + "month" before bare "total spend"
/// 3. category before vendor (a category question often names vendors too)
/// 4. the bare "invoice" listing after every aggregate that mentions invoices
/// 5. the always-true fallback last
const STANDARD_RULES: &[IntentRule] = &[
    IntentRule {
        name: "top_vendors_5",
        predicate: Predicate::AllOf(&["top 5", "vendor"]),
        sql: TOP_VENDORS_5_SQL,
        message: "Here are the top vendors by spend.",
    },
    IntentRule {
        name: "monthly_spend",
        predicate: Predicate::AllOf(&["total spend", "month"]),
        sql: MONTHLY_SPEND_SQL,
        message: "Monthly trend data retrieved.",
    },
    IntentRule {
        name: "category_spend",
        predicate: Predicate::AnyOf(&["category", "categories"]),
        sql: CATEGORY_SPEND_SQL,
        message: "Here's the spend breakdown by category.",
    },
    IntentRule {
        name: "total_spend",
        predicate: Predicate::AllOf(&["total spend"]),
        sql: TOTAL_SPEND_SQL,
        message: "Here's the total spend for the period.",
    },
    IntentRule {
        name: "average_invoice",
        predicate: Predicate::AllOf(&["average", "invoice"]),
        sql: AVERAGE_INVOICE_SQL,
        message: "Here's the average invoice amount.",
    },
    IntentRule {
        name: "top_vendors",
        predicate: Predicate::AnyOf(&["vendor", "supplier"]),
        sql: TOP_VENDORS_10_SQL,
        message: "Here are the top vendors by spend.",
    },
    IntentRule {
        name: "monthly_invoices",
        predicate: Predicate::AllOf(&["monthly", "invoice"]),
        sql: MONTHLY_INVOICES_SQL,
        message: "Monthly trend data retrieved.",
    },
    IntentRule {
        name: "invoice_trends",
        predicate: Predicate::AnyOf(&["trend", "over time"]),
        sql: MONTHLY_INVOICES_SQL,
        message: "Monthly trend data retrieved.",
    },
    IntentRule {
        name: "top_customers",
        predicate: Predicate::AllOf(&["customer"]),
        sql: TOP_CUSTOMERS_SQL,
        message: "Here's the breakdown by customer.",
    },
    IntentRule {
        name: "top_products",
        predicate: Predicate::AnyOf(&["product", "line item", "item"]),
        sql: TOP_PRODUCTS_SQL,
        message: "Here's the spend by product.",
    },
    IntentRule {
        name: "status_breakdown",
        predicate: Predicate::AllOf(&["status"]),
        sql: STATUS_BREAKDOWN_SQL,
        message: "Here's the invoice status breakdown.",
    },
    IntentRule {
        name: "cash_outflow",
        predicate: Predicate::AnyOf(&["payment", "outflow", "cash", "due"]),
        sql: CASH_OUTFLOW_SQL,
        message: "Here's the upcoming cash outflow.",
    },
    IntentRule {
        name: "recent_invoices",
        predicate: Predicate::AnyOf(&["invoice", "recent", "latest"]),
        sql: RECENT_INVOICES_SQL,
        message: "Here are the most recent invoices.",
    },
    IntentRule {
        name: "fallback",
        predicate: Predicate::Always,
        sql: FALLBACK_SQL,
        message: FALLBACK_MESSAGE,
    },
];

/// Ordered, immutable rule list
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: Vec<IntentRule>,
}

impl Catalog {
    /// Build a catalog from an explicit rule list
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Catalog { rules }
    }

    /// The standard rule set over the financial schema
    pub fn standard() -> Self {
        Catalog {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate every template: non-empty, read-only, single statement.
    ///
    /// Run once at startup; a failing catalog must not serve requests.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for rule in &self.rules {
            if rule.sql.trim().is_empty() {
                return Err(CatalogError::EmptyTemplate {
                    rule: rule.name.to_string(),
                });
            }
            if !statement::is_read_only(rule.sql) {
                return Err(CatalogError::NotReadOnly {
                    rule: rule.name.to_string(),
                });
            }
            if !statement::is_single_statement(rule.sql) {
                return Err(CatalogError::MultipleStatements {
                    rule: rule.name.to_string(),
                });
            }
        }
        Ok(())
    }
}
