//! Cursor scan over the ordered pattern table
//!
//! The scanner walks the source left to right.  At each position it tries
//! every rule in [`TOKEN_RULES`] order and takes the first whose match
//! starts exactly at the cursor, then advances past the matched text.  This
//! is first-match-wins by table priority, not longest-match across rules.
//!
//! Matching is done with [`Regex::find_at`] so word boundaries see the
//! character *before* the cursor: in `1if` there is no boundary between the
//! `1` and the `i`, so neither the keyword nor the identifier rule fires
//! there and the fallback consumes the characters one by one.

use super::rules::TOKEN_RULES;
use super::token::{Token, TokenKind};
use std::fmt;

/// Scan failure.
///
/// With the shipped rule table this is unreachable: the final fallback rule
/// matches any single character.  It exists so a defective table fails
/// closed instead of looping forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No rule (not even the fallback) produced a non-empty match at `offset`.
    NoRuleMatched { offset: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::NoRuleMatched { offset } => {
                write!(f, "no lexical rule matched at byte {} (defective rule table)", offset)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Scanner for the C-like input language.
pub struct Scanner<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over the given source string.
    pub fn new(source: &'a str) -> Self {
        Scanner { source, cursor: 0 }
    }

    /// Tokenize the entire input.
    ///
    /// Whitespace matches advance the cursor but are not emitted; every
    /// other match becomes a [`Token`] carrying its kind, exact text, and
    /// starting byte offset.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while self.cursor < self.source.len() {
            let (kind, text) = self.match_at_cursor()?;

            if kind != TokenKind::Whitespace {
                tokens.push(Token::new(kind, text, self.cursor));
            }
            self.cursor += text.len();
        }

        Ok(tokens)
    }

    /// Try every rule at the current cursor, in table order.
    ///
    /// A rule only counts if its match starts exactly at the cursor and is
    /// non-empty; a zero-length match would stall the scan, so it is
    /// treated the same as no match at all.
    fn match_at_cursor(&self) -> Result<(TokenKind, &'a str), LexError> {
        for (kind, regex) in TOKEN_RULES.iter() {
            if let Some(m) = regex.find_at(self.source, self.cursor) {
                if m.start() == self.cursor && m.end() > self.cursor {
                    return Ok((*kind, m.as_str()));
                }
            }
        }

        Err(LexError::NoRuleMatched {
            offset: self.cursor,
        })
    }
}

/// Tokenize `source` in one call.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = tokenize("if (x) { return x; }").unwrap();

        assert_eq!(
            texts(&tokens),
            vec!["if", "(", "x", ")", "{", "return", "x", ";", "}"]
        );
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Keyword,
                TokenKind::Delimiter,
                TokenKind::Identifier,
                TokenKind::Delimiter,
                TokenKind::Delimiter,
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Delimiter,
                TokenKind::Delimiter,
            ]
        );
    }

    #[test]
    fn test_keyword_precedence_over_identifier() {
        let tokens = tokenize("if").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "if");

        // A keyword embedded in a longer word is an identifier.
        let tokens = tokenize("iffy whiled").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Identifier]);
    }

    #[test]
    fn test_offsets_and_whitespace_gaps() {
        let source = "x  = 42;";
        let tokens = tokenize(source).unwrap();

        assert_eq!(texts(&tokens), vec!["x", "=", "42", ";"]);
        for token in &tokens {
            assert_eq!(&source[token.offset..token.end()], token.text);
        }
        // Gaps between consecutive tokens are pure whitespace.
        for pair in tokens.windows(2) {
            let gap = &source[pair[0].end()..pair[1].offset];
            assert!(gap.chars().all(char::is_whitespace), "gap {:?}", gap);
        }
    }

    #[test]
    fn test_literals() {
        let tokens = tokenize("3 3.14").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Literal, TokenKind::Literal]);
        assert_eq!(texts(&tokens), vec!["3", "3.14"]);

        // A trailing dot is not part of the literal.
        let tokens = tokenize("3.").unwrap();
        assert_eq!(texts(&tokens), vec!["3", "."]);
        assert_eq!(kinds(&tokens), vec![TokenKind::Literal, TokenKind::Unknown]);
    }

    #[test]
    fn test_operator_runs_munch_together() {
        let tokens = tokenize("a <= b != c").unwrap();
        assert_eq!(texts(&tokens), vec!["a", "<=", "b", "!=", "c"]);

        // Adjacent operator characters fuse into one token.
        let tokens = tokenize("==!=").unwrap();
        assert_eq!(texts(&tokens), vec!["==!="]);
        assert_eq!(tokens[0].kind, TokenKind::Operator);
    }

    #[test]
    fn test_string_text_keeps_quotes() {
        let tokens = tokenize(r#"x = "hi there";"#).unwrap();
        assert_eq!(tokens[2].kind, TokenKind::StringText);
        assert_eq!(tokens[2].text, r#""hi there""#);
    }

    #[test]
    fn test_unknown_fallback() {
        let tokens = tokenize("@").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "@");

        // The scan keeps going after an unknown character.
        let tokens = tokenize("a @ b").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Identifier, TokenKind::Unknown, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_number_glued_to_word() {
        // No word boundary inside "1if", so neither the literal nor the
        // keyword rule can fire and the fallback eats it char by char.
        let tokens = tokenize("1if").unwrap();
        assert_eq!(texts(&tokens), vec!["1", "i", "f"]);
        assert!(kinds(&tokens).iter().all(|k| *k == TokenKind::Unknown));
    }

    #[test]
    fn test_retokenize_is_identical() {
        let source = r#"while (n > 0) { n = n - 1; }"#;
        let first = tokenize(source).unwrap();
        let second = tokenize(source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), Vec::new());
        assert_eq!(tokenize("   \n\t ").unwrap(), Vec::new());
    }
}
