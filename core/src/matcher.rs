//! First-match-wins question resolution over the catalog
//!
//! Deterministic: the same question always resolves to the same rule.
//! Classification happens before any synthesis or store access.

use crate::catalog::{Catalog, IntentRule};

/// Resolves questions to catalog rules
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    catalog: Catalog,
}

impl IntentMatcher {
    pub fn new(catalog: Catalog) -> Self {
        IntentMatcher { catalog }
    }

    /// Matcher over the standard catalog
    pub fn standard() -> Self {
        IntentMatcher::new(Catalog::standard())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Normalize a question for matching: trim, Unicode case-fold.
    pub fn normalize(question: &str) -> String {
        question.trim().to_lowercase()
    }

    /// Resolve a question to the first rule whose predicate holds.
    ///
    /// The input is normalized here; passing already-normalized text is
    /// fine (normalization is idempotent). Returns `None` only when the
    /// catalog carries no always-true fallback, which the standard
    /// catalog does.
    pub fn resolve(&self, question: &str) -> Option<&IntentRule> {
        let normalized = Self::normalize(question);
        self.catalog
            .rules()
            .iter()
            .find(|rule| rule.predicate.matches(&normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{IntentRule, Predicate};

    #[test]
    fn test_normalize_trims_and_folds() {
        assert_eq!(IntentMatcher::normalize("  Top 5 Vendors  "), "top 5 vendors");
        assert_eq!(IntentMatcher::normalize("TOTAL SPEND"), "total spend");
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let matcher = IntentMatcher::standard();
        let rule = matcher.resolve("TOP 5 VENDORS BY SPEND THIS YEAR").unwrap();
        assert_eq!(rule.name, "top_vendors_5");
    }

    #[test]
    fn test_resolve_ignores_surrounding_text() {
        let matcher = IntentMatcher::standard();
        let rule = matcher
            .resolve("hey, could you show the top 5 vendors please?")
            .unwrap();
        assert_eq!(rule.name, "top_vendors_5");
    }

    #[test]
    fn test_specific_rule_wins_over_broad_rule() {
        let matcher = IntentMatcher::standard();

        let monthly = matcher.resolve("total spend by month").unwrap();
        assert_eq!(monthly.name, "monthly_spend");

        let total = matcher.resolve("what is our total spend?").unwrap();
        assert_eq!(total.name, "total_spend");
    }

    #[test]
    fn test_average_invoice_resolution() {
        let matcher = IntentMatcher::standard();
        let rule = matcher.resolve("average invoice amount").unwrap();
        assert_eq!(rule.name, "average_invoice");
    }

    #[test]
    fn test_overlapping_keywords_resolve_to_earlier_rule() {
        let matcher = IntentMatcher::standard();

        // Holds keywords of both "top_vendors" and "monthly_invoices";
        // the vendor rule sits earlier and wins.
        let rule = matcher.resolve("monthly invoice totals by vendor").unwrap();
        assert_eq!(rule.name, "top_vendors");
    }

    #[test]
    fn test_fallback_matches_anything() {
        let matcher = IntentMatcher::standard();
        let rule = matcher.resolve("tell me a story").unwrap();
        assert_eq!(rule.name, "fallback");
    }

    #[test]
    fn test_resolve_without_fallback_returns_none() {
        let catalog = Catalog::new(vec![IntentRule {
            name: "vendors_only",
            predicate: Predicate::AllOf(&["vendor"]),
            sql: "SELECT 1",
            message: "vendors",
        }]);
        let matcher = IntentMatcher::new(catalog);
        assert!(matcher.resolve("spend by category").is_none());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let matcher = IntentMatcher::standard();
        let first = matcher.resolve("spend by category").unwrap().name;
        let second = matcher.resolve("spend by category").unwrap().name;
        assert_eq!(first, second);
    }
}
