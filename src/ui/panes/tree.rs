//! Structure tree pane rendering
//!
//! The tree is shown as indented rows in preorder.  Rows are identified by
//! their preorder index over the *full* tree, so a row keeps its id when
//! other subtrees fold and the collapsed set stays stable across toggles.

use crate::tree::node::{BLOCK_LABEL, CONDITION_LABEL, ROOT_LABEL};
use crate::tree::TreeNode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use rustc_hash::FxHashSet;

/// One visible row of the tree pane.
pub struct TreeRow<'a> {
    /// Preorder index over the full tree; stable across folding.
    pub id: usize,
    pub depth: usize,
    pub label: &'a str,
    pub has_children: bool,
}

/// Flatten the tree into its currently visible rows.
///
/// Children of a collapsed row are skipped, but their preorder ids are
/// still accounted for so every node keeps a stable id.
pub fn visible_rows<'a>(root: &'a TreeNode, collapsed: &FxHashSet<usize>) -> Vec<TreeRow<'a>> {
    let mut rows = Vec::new();
    let mut next_id = 0;
    walk(root, 0, &mut next_id, collapsed, &mut rows);
    rows
}

fn walk<'a>(
    node: &'a TreeNode,
    depth: usize,
    next_id: &mut usize,
    collapsed: &FxHashSet<usize>,
    rows: &mut Vec<TreeRow<'a>>,
) {
    let id = *next_id;
    *next_id += 1;

    rows.push(TreeRow {
        id,
        depth,
        label: &node.label,
        has_children: !node.children.is_empty(),
    });

    if collapsed.contains(&id) {
        *next_id += node.size() - 1;
        return;
    }
    for child in &node.children {
        walk(child, depth + 1, next_id, collapsed, rows);
    }
}

fn label_style(label: &str) -> Style {
    match label {
        ROOT_LABEL | BLOCK_LABEL | CONDITION_LABEL => {
            Style::default().fg(DEFAULT_THEME.structural)
        }
        "if" | "else" | "while" | "return" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the tree pane.
///
/// `rows` must be the result of [`visible_rows`] for the current collapsed
/// set; `selected` indexes into `rows`.
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    rows: &[TreeRow],
    selected: usize,
    collapsed: &FxHashSet<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Structure Tree ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if selected < *scroll_offset {
        *scroll_offset = selected;
    } else if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected + 1 - visible_height;
    }
    if rows.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(rows.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, row)| {
            let marker = if !row.has_children {
                "  "
            } else if collapsed.contains(&row.id) {
                "▸ "
            } else {
                "▾ "
            };

            let line = Line::from(vec![
                Span::raw("  ".repeat(row.depth)),
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(row.label.to_string(), label_style(row.label)),
            ]);

            let row_style = if idx == selected {
                Style::default().bg(DEFAULT_THEME.selection_bg)
            } else {
                Style::default()
            };

            ListItem::new(line).style(row_style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::tree::build_tree;

    fn demo_tree() -> TreeNode {
        build_tree(&tokenize("if(x){return x;}").unwrap()).unwrap()
    }

    #[test]
    fn test_visible_rows_preorder() {
        let tree = demo_tree();
        let rows = visible_rows(&tree, &FxHashSet::default());

        let labels: Vec<&str> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["expression", "if", "condition", "x", "block", "return", "x"]
        );
        let ids: Vec<usize> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_collapse_skips_subtree_but_keeps_ids() {
        let tree = demo_tree();
        let mut collapsed = FxHashSet::default();
        collapsed.insert(2); // the condition node

        let rows = visible_rows(&tree, &collapsed);
        let labels: Vec<&str> = rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["expression", "if", "condition", "block", "return", "x"]);

        // `block` keeps its full-tree preorder id even while `x` is hidden.
        let block_row = rows.iter().find(|r| r.label == "block").unwrap();
        assert_eq!(block_row.id, 4);
    }

    #[test]
    fn test_collapse_root_hides_everything_else() {
        let tree = demo_tree();
        let mut collapsed = FxHashSet::default();
        collapsed.insert(0);

        let rows = visible_rows(&tree, &collapsed);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "expression");
    }
}
