//! Lexical analysis for the C-like input language
//!
//! This module turns raw source text into a flat [`Token`] stream:
//! - [`rules`]: the ordered pattern table (kind → compiled regex)
//! - [`scanner`]: the cursor scan that applies the table first-match-wins
//! - [`token`]: token kind and token definitions
//!
//! # Scanning model
//!
//! There is no hand-written character automaton.  At every cursor position
//! the scanner tries each table rule in priority order and takes the first
//! one that matches exactly there; the keyword rule outranks the identifier
//! rule so reserved words are never misclassified, and a single-character
//! fallback rule sits last so the cursor always advances.  Whitespace is
//! matched and consumed but never emitted.

pub mod rules;
pub mod scanner;
pub mod token;

pub use scanner::{tokenize, LexError, Scanner};
pub use token::{Token, TokenKind};
