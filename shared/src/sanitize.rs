//! Identifier sanitization
//!
//! Raw user-entered game account ids arrive with decorative noise: spaces,
//! the zone id pasted as "(1234)", hyphen grouping, fullwidth punctuation
//! from IME keyboards. Sanitization strips the noise instead of rejecting
//! the input. Both functions are pure and total.

/// Strip every whitespace character from a primary identifier.
///
/// No other character class is touched; game user ids are not guaranteed to
/// be numeric.
pub fn sanitize_primary(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Strip parentheses (ASCII and fullwidth), hyphens, and whitespace from a
/// secondary (zone/server) identifier.
pub fn sanitize_secondary(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '（' | '）' | '-'))
        .collect()
}
