//! Structure-tree node definitions

use std::fmt;

/// Label of every tree root.
pub const ROOT_LABEL: &str = "expression";

/// Label of a `{ }` grouping node.
pub const BLOCK_LABEL: &str = "block";

/// Label of a `( )` grouping node.
pub const CONDITION_LABEL: &str = "condition";

/// A node in the structure tree.
///
/// Structural nodes carry a fixed name (`"expression"`, `"block"`,
/// `"condition"`, or a control keyword); leaves carry the literal text of
/// the token they came from.  Children are owned and ordered by appearance
/// in the input, so the tree is acyclic and single-rooted by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        TreeNode {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total node count including this node.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{}{}", "  ".repeat(depth), self.label)?;
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented listing, one label per line, two spaces per nesting level.
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_indents_by_depth() {
        let mut root = TreeNode::new(ROOT_LABEL);
        let mut cond = TreeNode::new(CONDITION_LABEL);
        cond.children.push(TreeNode::new("x"));
        root.children.push(cond);

        assert_eq!(root.to_string(), "expression\n  condition\n    x\n");
    }

    #[test]
    fn test_size_counts_all_nodes() {
        let mut root = TreeNode::new(ROOT_LABEL);
        root.children.push(TreeNode::new("a"));
        root.children.push(TreeNode::new("b"));
        assert_eq!(root.size(), 3);
        assert!(root.children[0].is_leaf());
    }
}
