//! Source pane rendering with lexer-driven highlighting
//!
//! Unlike an ad-hoc per-character highlighter, this pane runs the real
//! [`Scanner`](crate::lexer::Scanner) on each visible line and styles the
//! matched spans by token kind, so the colors always agree with what the
//! tokens pane shows.

use crate::lexer::{tokenize, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Keyword => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::StringText => Style::default().fg(DEFAULT_THEME.string),
        TokenKind::Literal => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Delimiter => Style::default().fg(DEFAULT_THEME.bracket),
        TokenKind::Unknown => Style::default().fg(DEFAULT_THEME.unknown),
        TokenKind::Identifier | TokenKind::Operator | TokenKind::Whitespace => {
            Style::default().fg(DEFAULT_THEME.fg)
        }
    }
}

/// Highlight one line of source by scanning it.
fn highlight_line(line: &str) -> Line<'_> {
    let tokens = match tokenize(line) {
        Ok(tokens) => tokens,
        // Unreachable with the shipped rule table; show the line unstyled.
        Err(_) => return Line::from(Span::raw(line)),
    };

    let mut spans = Vec::new();
    let mut cursor = 0;
    for token in &tokens {
        if token.offset > cursor {
            spans.push(Span::raw(line[cursor..token.offset].to_string()));
        }
        spans.push(Span::styled(token.text.clone(), kind_style(token.kind)));
        cursor = token.end();
    }
    if cursor < line.len() {
        spans.push(Span::raw(line[cursor..].to_string()));
    }

    Line::from(spans)
}

/// Render the source pane.
///
/// `marked_line` is the 1-based line of the currently selected token; it is
/// kept visible by adjusting the scroll offset and drawn with a background
/// highlight.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    marked_line: Option<usize>,
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
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the marked line on screen.
    if let Some(line) = marked_line {
        let idx = line.saturating_sub(1);
        if idx < *scroll_offset {
            *scroll_offset = idx;
        } else if idx >= *scroll_offset + visible_height {
            *scroll_offset = idx + 1 - visible_height;
        }
    }
    if total_lines > visible_height {
        *scroll_offset = (*scroll_offset).min(total_lines - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, text)| {
            let line_num = idx + 1;
            let is_marked = marked_line == Some(line_num);

            let num_style = if is_marked {
                Style::default()
                    .fg(DEFAULT_THEME.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content = highlight_line(text);
            if is_marked {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
