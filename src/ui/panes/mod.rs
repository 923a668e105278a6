//! TUI pane rendering modules
//!
//! Stateless render functions for the visible panes, one module per pane:
//!
//! - [`source`]: source text with line numbers, lexer-driven highlighting,
//!   and the selected token's line marked
//! - [`tokens`]: the scanner output as a selectable list
//! - [`tree`]: the structure tree as indented, foldable rows
//! - [`status`]: bottom status bar with keybindings and counters
//!
//! Each render function takes the frame, its area, the data to show, and
//! whatever scroll/selection state it needs; scroll offsets are clamped in
//! place so callers never have to know pane heights.

pub mod source;
pub mod status;
pub mod tokens;
pub mod tree;

pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::{render_tree_pane, visible_rows, TreeRow};
