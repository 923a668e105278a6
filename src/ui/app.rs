//! Main TUI application state and logic

use crate::lexer::Token;
use crate::tree::TreeNode;
use crate::ui::panes;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashSet;
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Tree,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> tree)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tree,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Tree => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// The source text being browsed
    pub source: String,

    /// Scanner output for `source`
    pub tokens: Vec<Token>,

    /// Structure tree built from `tokens`
    pub tree: TreeNode,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub tree_scroll: usize,

    /// Index of the selected token (drives the source line highlight)
    pub selected_token: usize,

    /// Index of the selected visible tree row
    pub selected_row: usize,

    /// Preorder ids of collapsed tree nodes
    pub collapsed: FxHashSet<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app over an already-analyzed source.
    pub fn new(source: String, tokens: Vec<Token>, tree: TreeNode) -> Self {
        App {
            source,
            tokens,
            tree,
            focused_pane: FocusedPane::Tree,
            source_scroll: 0,
            tokens_scroll: 0,
            tree_scroll: 0,
            selected_token: 0,
            selected_row: 0,
            collapsed: FxHashSet::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// 1-based source line of the selected token, if any tokens exist.
    fn marked_line(&self) -> Option<usize> {
        let token = self.tokens.get(self.selected_token)?;
        let line = self.source[..token.offset]
            .bytes()
            .filter(|b| *b == b'\n')
            .count()
            + 1;
        Some(line)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Pane area above, one-line status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: source over tokens; right column: the tree
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source,
            self.marked_line(),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_tokens_pane(
            frame,
            left_rows[1],
            &self.tokens,
            self.selected_token,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        let rows = panes::visible_rows(&self.tree, &self.collapsed);
        self.selected_row = self.selected_row.min(rows.len().saturating_sub(1));
        panes::render_tree_pane(
            frame,
            columns[1],
            &rows,
            self.selected_row,
            &self.collapsed,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.tokens.len(),
            self.tree.size(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            // Token selection is global: it drives the source highlight
            // regardless of which pane has focus.
            KeyCode::Left => {
                self.select_token(self.selected_token.saturating_sub(1));
            }
            KeyCode::Right => {
                self.select_token(self.selected_token.saturating_add(1));
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    self.source_scroll = self.source_scroll.saturating_sub(1);
                }
                FocusedPane::Tokens => {
                    self.select_token(self.selected_token.saturating_sub(1));
                }
                FocusedPane::Tree => {
                    self.selected_row = self.selected_row.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    self.source_scroll = self.source_scroll.saturating_add(1);
                }
                FocusedPane::Tokens => {
                    self.select_token(self.selected_token.saturating_add(1));
                }
                FocusedPane::Tree => {
                    let row_count = panes::visible_rows(&self.tree, &self.collapsed).len();
                    if self.selected_row + 1 < row_count {
                        self.selected_row += 1;
                    }
                }
            },
            KeyCode::Enter => {
                if self.focused_pane == FocusedPane::Tree {
                    self.toggle_fold();
                }
            }
            _ => {}
        }
    }

    fn select_token(&mut self, index: usize) {
        if self.tokens.is_empty() {
            return;
        }
        self.selected_token = index.min(self.tokens.len() - 1);
        let token = &self.tokens[self.selected_token];
        self.status_message = token.to_string();
    }

    /// Collapse or expand the selected tree row.
    fn toggle_fold(&mut self) {
        let rows = panes::visible_rows(&self.tree, &self.collapsed);
        let Some(row) = rows.get(self.selected_row) else {
            return;
        };

        if !row.has_children {
            self.status_message = format!("'{}' is a leaf", row.label);
            return;
        }

        if self.collapsed.remove(&row.id) {
            self.status_message = format!("Expanded '{}'", row.label);
        } else {
            self.collapsed.insert(row.id);
            self.status_message = format!("Collapsed '{}'", row.label);
        }
    }
}
