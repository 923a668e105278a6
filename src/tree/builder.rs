//! Context-stack tree builder
//!
//! Walks the token stream once and grows the tree under a `current` context
//! node.  `if`/`else`/`while`, `{`, and `(` each open a new context: the new
//! node is appended under `current`, `current` is saved on the stack, and
//! the new node takes over.  `}` and `)` restore the saved context.  The
//! builder never validates grammar; `return 5` outside any block or an
//! unclosed `if(` at end of input are accepted as-is.
//!
//! Nodes live in an arena and `current` is an index into it, so the tree
//! stays singly-owned while still allowing the parent-hopping the stack
//! discipline needs.  The owned [`TreeNode`] tree is materialized from the
//! arena once all tokens are processed.

use super::node::{TreeNode, BLOCK_LABEL, CONDITION_LABEL, ROOT_LABEL};
use crate::lexer::{Token, TokenKind};
use std::fmt;

/// Arena index of the root node.
const ROOT: usize = 0;

/// Structural failure while building the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A `}` or `)` arrived with no open context to close.
    UnbalancedClose { delimiter: char, offset: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::UnbalancedClose { delimiter, offset } => {
                write!(
                    f,
                    "unbalanced '{}' at byte {}: nothing open to close",
                    delimiter, offset
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}

struct ArenaNode {
    label: String,
    children: Vec<usize>,
}

/// Builds the structure tree from a token slice.
///
/// One-shot: `build` consumes the builder, so stack and arena state can
/// never leak from one build into the next.
pub struct TreeBuilder {
    arena: Vec<ArenaNode>,
    current: usize,
    stack: Vec<usize>,
}

impl TreeBuilder {
    /// Create a builder holding only the root context.
    ///
    /// The root is the initial `current` but is not a stack entry; a close
    /// delimiter with nothing open fails instead of popping the root.
    pub fn new() -> Self {
        TreeBuilder {
            arena: vec![ArenaNode {
                label: ROOT_LABEL.to_string(),
                children: Vec::new(),
            }],
            current: ROOT,
            stack: Vec::new(),
        }
    }

    /// Process all tokens and return the finished tree.
    ///
    /// Unclosed contexts remaining at end of input are accepted; the only
    /// error is a close with an empty context stack.
    pub fn build(mut self, tokens: &[Token]) -> Result<TreeNode, BuildError> {
        for token in tokens {
            self.process(token)?;
        }
        Ok(self.materialize(ROOT))
    }

    fn process(&mut self, token: &Token) -> Result<(), BuildError> {
        match token.kind {
            TokenKind::Keyword => match token.text.as_str() {
                "if" | "else" | "while" => self.open(&token.text),
                "return" => self.leaf(&token.text),
                // The keyword rule only matches the four words above.
                _ => {}
            },
            TokenKind::Delimiter => match token.text.as_str() {
                "{" => self.open(BLOCK_LABEL),
                "}" => self.close('}', token.offset)?,
                "(" => self.open(CONDITION_LABEL),
                ")" => self.close(')', token.offset)?,
                // Structurally inert; consumed without a tree node.
                "[" | "]" | ";" | "," => {}
                _ => {}
            },
            TokenKind::Identifier
            | TokenKind::Literal
            | TokenKind::Operator
            | TokenKind::StringText => self.leaf(&token.text),
            // The scanner never emits whitespace; unknown characters carry
            // no structure.
            TokenKind::Whitespace | TokenKind::Unknown => {}
        }
        Ok(())
    }

    /// Append a new node under `current` and make it the new context.
    fn open(&mut self, label: &str) {
        let index = self.push_child(label);
        self.stack.push(self.current);
        self.current = index;
    }

    /// Append a leaf under `current`; no context change.
    fn leaf(&mut self, label: &str) {
        self.push_child(label);
    }

    /// Restore the enclosing context saved by the matching open.
    fn close(&mut self, delimiter: char, offset: usize) -> Result<(), BuildError> {
        self.current = self
            .stack
            .pop()
            .ok_or(BuildError::UnbalancedClose { delimiter, offset })?;
        Ok(())
    }

    fn push_child(&mut self, label: &str) -> usize {
        let index = self.arena.len();
        self.arena.push(ArenaNode {
            label: label.to_string(),
            children: Vec::new(),
        });
        self.arena[self.current].children.push(index);
        index
    }

    fn materialize(&self, index: usize) -> TreeNode {
        let node = &self.arena[index];
        TreeNode {
            label: node.label.clone(),
            children: node
                .children
                .iter()
                .map(|&child| self.materialize(child))
                .collect(),
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        TreeBuilder::new()
    }
}

/// Build the structure tree for `tokens` in one call.
pub fn build_tree(tokens: &[Token]) -> Result<TreeNode, BuildError> {
    TreeBuilder::new().build(tokens)
}
