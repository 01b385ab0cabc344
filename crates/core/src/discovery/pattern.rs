//! Free-text search sanitization.
//!
//! Caller input is matched with a case-insensitive `ILIKE` substring
//! filter. The raw string must never be interpolated into the pattern
//! unescaped: `%`, `_`, and `\` carry meaning in the LIKE pattern
//! language, so a query of `100%` would otherwise match `100` followed
//! by anything. The executor appends `ESCAPE '\'` to every filter built
//! from a [`SearchPattern`].

/// Maximum accepted length (in bytes) of a free-text query. Longer
/// input fails closed to [`SearchPattern::MatchNothing`] rather than
/// erroring: search is a best-effort narrowing feature, and an absurd
/// pattern must not alter control flow.
pub const MAX_SEARCH_PATTERN_LEN: usize = 256;

/// The sanitized output of [`build_search_pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPattern {
    /// An escaped pattern fragment, safe to wrap in `%...%` and bind to
    /// an `ILIKE ... ESCAPE '\'` filter. Matches the caller's text
    /// literally.
    Literal(String),
    /// A pattern that matches no record at all.
    MatchNothing,
}

/// Escape a raw free-text query for literal substring matching.
pub fn build_search_pattern(raw: &str) -> SearchPattern {
    if raw.len() > MAX_SEARCH_PATTERN_LEN {
        return SearchPattern::MatchNothing;
    }

    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' | '%' | '_' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    SearchPattern::Literal(escaped)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(
            build_search_pattern("rust tutorial"),
            SearchPattern::Literal("rust tutorial".to_string())
        );
    }

    #[test]
    fn percent_is_escaped() {
        assert_eq!(
            build_search_pattern("100%"),
            SearchPattern::Literal("100\\%".to_string())
        );
    }

    #[test]
    fn underscore_is_escaped() {
        assert_eq!(
            build_search_pattern("a_b"),
            SearchPattern::Literal("a\\_b".to_string())
        );
    }

    #[test]
    fn backslash_is_escaped_first() {
        assert_eq!(
            build_search_pattern("a\\%b"),
            SearchPattern::Literal("a\\\\\\%b".to_string())
        );
    }

    #[test]
    fn regex_metacharacters_are_inert_in_like_patterns() {
        // `.` and `*` have no meaning in LIKE patterns, so they pass
        // through untouched and match only literally.
        assert_eq!(
            build_search_pattern("a.b*"),
            SearchPattern::Literal("a.b*".to_string())
        );
    }

    #[test]
    fn oversized_input_fails_closed() {
        let long = "x".repeat(MAX_SEARCH_PATTERN_LEN + 1);
        assert_eq!(build_search_pattern(&long), SearchPattern::MatchNothing);
    }

    #[test]
    fn input_at_the_limit_is_accepted() {
        let at_limit = "x".repeat(MAX_SEARCH_PATTERN_LEN);
        assert_eq!(
            build_search_pattern(&at_limit),
            SearchPattern::Literal(at_limit)
        );
    }
}
