//! The ordered pattern table
//!
//! One compiled regex per [`TokenKind`], tried strictly in the order listed
//! here.  Order is load-bearing twice over: the keyword rule must come
//! before the identifier rule so reserved words win, and the
//! single-character fallback must come last so the scan is guaranteed to
//! advance at every position.  No rule may match the empty string.
//!
//! The table is process-wide immutable configuration, compiled once behind
//! a [`Lazy`] static and only ever handed out by reference.

use super::token::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Kind → pattern, in match priority order.
///
/// The fallback uses `(?s).` so it also matches a bare newline; every other
/// newline is swallowed by the whitespace rule first, but the fallback must
/// hold unconditionally for the scan's progress guarantee.
pub static TOKEN_RULES: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    vec![
        rule(TokenKind::Keyword, r"\b(if|else|while|return)\b"),
        rule(TokenKind::Identifier, r"\b[a-zA-Z_][a-zA-Z_0-9]*\b"),
        rule(TokenKind::Literal, r"\b\d+(\.\d+)?\b"),
        rule(TokenKind::Operator, r"[+\-*/=<>!]+"),
        rule(TokenKind::Delimiter, r"[()\[\]{};,]"),
        rule(TokenKind::StringText, r#""[^"]*""#),
        rule(TokenKind::Whitespace, r"\s+"),
        rule(TokenKind::Unknown, r"(?s)."),
    ]
});

fn rule(kind: TokenKind, pattern: &str) -> (TokenKind, Regex) {
    // Patterns are compile-time constants; a failure here is a table
    // authoring bug, caught by the unit tests below.
    (kind, Regex::new(pattern).expect("invalid token rule pattern"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let kinds: Vec<TokenKind> = TOKEN_RULES.iter().map(|(kind, _)| *kind).collect();

        // Keywords must be tried before identifiers, the fallback last.
        let keyword_pos = kinds.iter().position(|k| *k == TokenKind::Keyword).unwrap();
        let ident_pos = kinds
            .iter()
            .position(|k| *k == TokenKind::Identifier)
            .unwrap();
        assert!(keyword_pos < ident_pos);
        assert_eq!(kinds.last(), Some(&TokenKind::Unknown));
    }

    #[test]
    fn test_every_kind_has_one_rule() {
        assert_eq!(TOKEN_RULES.len(), 8);
        let kinds: std::collections::HashSet<TokenKind> =
            TOKEN_RULES.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds.len(), 8, "duplicate kind in rule table");
    }

    #[test]
    fn test_fallback_matches_any_character() {
        let (_, fallback) = TOKEN_RULES.last().unwrap();
        for text in ["@", "#", "\n", "é", "$"] {
            let m = fallback.find(text).expect("fallback must match");
            assert_eq!(m.start(), 0);
            assert!(!m.as_str().is_empty());
        }
    }

    #[test]
    fn test_no_rule_matches_empty() {
        for (kind, regex) in TOKEN_RULES.iter() {
            if let Some(m) = regex.find("") {
                panic!("rule {} matched empty input: {:?}", kind, m);
            }
        }
    }
}
