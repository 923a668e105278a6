//! Token list pane rendering

use crate::lexer::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the token list pane.
///
/// One row per token: index, kind label, quoted text, byte offset.  The
/// selected row is highlighted and kept on screen by clamping the scroll
/// offset around it.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    selected: usize,
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
        .title(format!(" Tokens ({}) ", tokens.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the selection visible.
    if selected < *scroll_offset {
        *scroll_offset = selected;
    } else if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected + 1 - visible_height;
    }
    if tokens.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(tokens.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, token)| {
            let is_selected = idx == selected;

            let row_style = if is_selected {
                Style::default().bg(DEFAULT_THEME.selection_bg)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:4} ", idx),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<11}", token.kind.label()),
                    Style::default().fg(DEFAULT_THEME.keyword),
                ),
                Span::styled(
                    format!("'{}' ", token.text),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(
                    format!("@{}", token.offset),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]);

            ListItem::new(line).style(row_style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
