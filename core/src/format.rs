//! Response formatting
//!
//! Turns decoded rows into the wire shape. Every output cell is a
//! string; numbers become currency text and NULL becomes the sentinel.

use crate::types::{ChatResponse, FormattedRow, ResultRow, SqlScalar};

pub const CURRENCY_SYMBOL: &str = "₹";
pub const NULL_SENTINEL: &str = "N/A";

/// Keyword to response sentence, evaluated against the normalized question.
/// Priority order (first match wins).
const RESPONSE_MESSAGES: [(&str, &str); 12] = [
    ("total spend", "Here's the total spend for the period."),
    ("top", "Here are the top vendors by spend."),
    ("average", "Here's the average invoice amount."),
    ("category", "Here's the spend breakdown by category."),
    ("categories", "Here's the spend breakdown by category."),
    ("month", "Monthly trend data retrieved."),
    ("trend", "Monthly trend data retrieved."),
    ("customer", "Here's the breakdown by customer."),
    ("product", "Here's the spend by product."),
    ("status", "Here's the invoice status breakdown."),
    ("payment", "Here's the upcoming cash outflow."),
    ("outflow", "Here's the upcoming cash outflow."),
];

/// First keyword contained in the normalized question decides the sentence
pub fn select_message(normalized_question: &str) -> Option<&'static str> {
    RESPONSE_MESSAGES
        .iter()
        .find(|(keyword, _)| normalized_question.contains(keyword))
        .map(|(_, message)| *message)
}

/// Assemble the chat reply. `fallback` is the matched rule's own sentence,
/// used when no message keyword hits the question.
pub fn format_response(rows: &[ResultRow], message_key: &str, fallback: &str) -> ChatResponse {
    let message = select_message(message_key).unwrap_or(fallback).to_string();
    ChatResponse {
        message,
        rows: rows.iter().map(format_row).collect(),
    }
}

/// Render one row, preserving column order
pub fn format_row(row: &ResultRow) -> FormattedRow {
    FormattedRow {
        columns: row
            .columns
            .iter()
            .map(|(name, value)| (name.clone(), format_scalar(value)))
            .collect(),
    }
}

/// Render one cell. Numbers become currency strings, NULL becomes the
/// sentinel, everything else keeps its natural display form.
pub fn format_scalar(value: &SqlScalar) -> String {
    match value {
        SqlScalar::Null => NULL_SENTINEL.to_string(),
        SqlScalar::Bool(v) => v.to_string(),
        SqlScalar::Int(v) => format_currency_i64(*v),
        SqlScalar::Float(v) => format_currency_f64(*v),
        SqlScalar::Decimal(v) => format_currency_decimal(v),
        SqlScalar::Text(v) => v.clone(),
        SqlScalar::Date(v) => v.format("%Y-%m-%d").to_string(),
        SqlScalar::Timestamp(v) => v.format("%Y-%m-%d %H:%M:%S").to_string(),
        SqlScalar::TimestampTz(v) => v.to_rfc3339(),
    }
}

pub fn format_currency_i64(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    currency_string(value < 0, &digits, "00")
}

pub fn format_currency_f64(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.2}", value.abs());
    // A value that rounds to 0.00 keeps no sign.
    let negative = value < 0.0 && rendered != "0.00";

    let (int_part, frac_part) = match rendered.split_once('.') {
        Some(parts) => parts,
        None => (rendered.as_str(), "00"),
    };
    currency_string(negative, int_part, frac_part)
}

pub fn format_currency_decimal(value: &rust_decimal::Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let abs = rounded.abs().to_string();
    let mut parts = abs.splitn(2, '.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = format!("{:0<2}", parts.next().unwrap_or(""));

    currency_string(negative, int_part, &frac_part)
}

fn currency_string(negative: bool, int_digits: &str, frac: &str) -> String {
    let grouped = group_thousands(int_digits);
    if negative {
        format!("-{}{}.{}", CURRENCY_SYMBOL, grouped, frac)
    } else {
        format!("{}{}.{}", CURRENCY_SYMBOL, grouped, frac)
    }
}

// Input is the ASCII digit string of an absolute value.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FALLBACK_MESSAGE;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_integer_currency() {
        assert_eq!(format_currency_i64(0), "₹0.00");
        assert_eq!(format_currency_i64(7), "₹7.00");
        assert_eq!(format_currency_i64(125_000), "₹125,000.00");
        assert_eq!(format_currency_i64(-1_500), "-₹1,500.00");
        assert_eq!(
            format_currency_i64(i64::MIN),
            "-₹9,223,372,036,854,775,808.00"
        );
    }

    #[test]
    fn test_float_currency() {
        assert_eq!(format_currency_f64(1_234_567.891), "₹1,234,567.89");
        assert_eq!(format_currency_f64(0.0), "₹0.00");
        assert_eq!(format_currency_f64(999.999), "₹1,000.00");
        assert_eq!(format_currency_f64(-1_234.5), "-₹1,234.50");
    }

    #[test]
    fn test_float_that_rounds_to_zero_keeps_no_sign() {
        assert_eq!(format_currency_f64(-0.001), "₹0.00");
    }

    #[test]
    fn test_decimal_currency() {
        let value = Decimal::from_str("1234567.895").unwrap();
        assert_eq!(format_currency_decimal(&value), "₹1,234,567.90");

        let short_scale = Decimal::from_str("12.5").unwrap();
        assert_eq!(format_currency_decimal(&short_scale), "₹12.50");

        let whole = Decimal::from_str("98000").unwrap();
        assert_eq!(format_currency_decimal(&whole), "₹98,000.00");

        let negative = Decimal::from_str("-0.25").unwrap();
        assert_eq!(format_currency_decimal(&negative), "-₹0.25");
    }

    #[test]
    fn test_currency_shape_property() {
        let pattern = regex::Regex::new(r"^-?₹\d{1,3}(,\d{3})*\.\d{2}$").unwrap();
        let samples = [
            format_currency_i64(0),
            format_currency_i64(1),
            format_currency_i64(999),
            format_currency_i64(1_000),
            format_currency_i64(-999_999),
            format_currency_f64(3.14159),
            format_currency_f64(-87_654_321.09),
            format_currency_decimal(&Decimal::from_str("42000.1").unwrap()),
        ];
        for sample in &samples {
            assert!(pattern.is_match(sample), "unexpected shape: {}", sample);
        }
    }

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(format_scalar(&SqlScalar::Null), "N/A");
        assert_eq!(format_scalar(&SqlScalar::Bool(true)), "true");
        assert_eq!(format_scalar(&SqlScalar::Text("Acme Corp".to_string())), "Acme Corp");
        assert_eq!(
            format_scalar(&SqlScalar::Date(
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
            )),
            "2024-03-15"
        );
        assert_eq!(
            format_scalar(&SqlScalar::Timestamp(
                NaiveDate::from_ymd_opt(2024, 3, 15)
                    .unwrap()
                    .and_hms_opt(9, 30, 0)
                    .unwrap()
            )),
            "2024-03-15 09:30:00"
        );
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        assert_eq!(
            format_scalar(&SqlScalar::TimestampTz(instant)),
            "2024-03-15T09:30:00+00:00"
        );
    }

    #[test]
    fn test_message_priority_total_spend_beats_top() {
        let message = select_message("what is the total spend on our top vendors").unwrap();
        assert_eq!(message, "Here's the total spend for the period.");
    }

    #[test]
    fn test_message_priority_top_beats_average() {
        let message = select_message("top vendors by average order").unwrap();
        assert_eq!(message, "Here are the top vendors by spend.");
    }

    #[test]
    fn test_no_keyword_falls_back_to_rule_sentence() {
        assert_eq!(select_message("hello there"), None);
        let response = format_response(&[], "hello there", FALLBACK_MESSAGE);
        assert_eq!(response.message, FALLBACK_MESSAGE);
        assert!(response.rows.is_empty());
    }

    #[test]
    fn test_format_response_rows_and_order() {
        let rows = vec![ResultRow {
            columns: vec![
                ("vendor".to_string(), SqlScalar::Text("Globex".to_string())),
                ("spend".to_string(), SqlScalar::Float(125_000.0)),
                ("last_invoice".to_string(), SqlScalar::Null),
            ],
        }];

        let response = format_response(&rows, "top vendors", FALLBACK_MESSAGE);
        assert_eq!(response.message, "Here are the top vendors by spend.");

        let encoded = serde_json::to_string(&response.rows[0]).unwrap();
        assert_eq!(
            encoded,
            r#"{"vendor":"Globex","spend":"₹125,000.00","last_invoice":"N/A"}"#
        );
    }
}
