//! # Introduction
//!
//! lextree scans a minimal C-like language (the `if`/`else`/`while`/`return`
//! subset) into a flat token stream, then groups the tokens into a structure
//! tree driven by control keywords and bracket pairs.  The token list and the
//! tree are browsed side by side in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Analysis pipeline
//!
//! ```text
//! Source → Scanner → Tokens → TreeBuilder → SyntaxTree → TUI
//! ```
//!
//! 1. [`lexer`] — ordered-pattern scanner; classifies every span of the
//!    input against a fixed rule table ([`lexer::rules`]).
//! 2. [`tree`] — context-stack tree builder; `{ }` opens a `block` node,
//!    `( )` opens a `condition` node, `if`/`else`/`while` open a node named
//!    after the keyword.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Recognized language
//!
//! Keywords: `if`, `else`, `while`, `return`.
//! Tokens: identifiers, integer/decimal literals, `"..."` strings, the
//! operator characters `+ - * / = < > !`, and the delimiters `( ) [ ] { } ; ,`.
//! Anything else becomes a single-character `unknown` token rather than a
//! scan failure.

pub mod lexer;
pub mod tree;
pub mod ui;
