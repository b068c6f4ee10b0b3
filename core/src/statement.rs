//! Read-only and single-statement checks
//!
//! Text-level policy, not a SQL parser. Applied to catalog templates at
//! startup, to generated SQL at synthesis time, and again by the
//! executor before any store access.

/// Check that a statement begins with the SELECT keyword.
///
/// Case-insensitive, leading whitespace ignored. The character after the
/// keyword must not extend it ("selection ..." is not a read statement,
/// "select*from t" is).
pub fn is_read_only(sql: &str) -> bool {
    // Compare bytes; a &str slice here could land inside a multibyte character.
    let bytes = sql.trim_start().as_bytes();
    if bytes.len() < 6 || !bytes[..6].eq_ignore_ascii_case(b"select") {
        return false;
    }
    match bytes.get(6) {
        Some(next) => !next.is_ascii_alphanumeric() && *next != b'_',
        None => true,
    }
}

/// Check that the text holds exactly one statement.
///
/// A single trailing semicolon is tolerated; any interior semicolon is
/// rejected, including one inside a string literal.
pub fn is_single_statement(sql: &str) -> bool {
    let trimmed = sql.trim_end().trim_end_matches(';');
    !trimmed.contains(';')
}
