//! The UI renders the attached sidebar into something visible and navigable.
//!
//! Rows come straight from the headless container, so what is shown is exactly what the
//! controller left expanded, active and scrolled. Nesting is drawn with box-drawing characters.

use crate::app_state::AppState;
use crate::host::{Row, SidebarHost};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the sidebar and the help bar.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    // Borders take one line at the top and one at the bottom.
    app.resize(u32::from(chunks[0].height.saturating_sub(2)));

    let rows = app.rows();
    let is_last = last_at_depth(&rows);
    let range = app.scrollbox.visible_range();

    let mut parent_has_siblings: Vec<bool> = Vec::new();
    let mut items: Vec<ListItem> = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        while parent_has_siblings.len() > row.depth {
            parent_has_siblings.pop();
        }
        while parent_has_siblings.len() < row.depth {
            parent_has_siblings.push(false);
        }
        if row.depth > 0 {
            let parent_idx = parent_has_siblings.len() - 1;
            parent_has_siblings[parent_idx] = !is_last[i];
        }
        if !range.contains(&i) {
            continue;
        }

        let mut spans = vec![Span::raw(get_tree_prefix(
            row.depth,
            is_last[i],
            &parent_has_siblings,
        ))];
        spans.push(Span::raw(match (row.toggle, row.expanded) {
            (Some(_), true) => "▾ ",
            (Some(_), false) => "❱ ",
            (None, _) => "  ",
        }));

        let text_style = if row.href.is_none() {
            Style::default().fg(Color::DarkGray)
        } else if row.active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(row.text.clone(), text_style));

        let style = if i == app.cursor {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        items.push(ListItem::new(Line::from(spans)).style(style));
    }

    let title = format!(
        "{} (scroll {})",
        app.book_path().unwrap_or_else(|| app.page.normalized().to_string()),
        app.scrollbox.scroll_top()
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, chunks[0]);

    let help = app.message.clone().unwrap_or_else(|| {
        "↑/↓: Navigate | Enter: Open | Space: Fold | n/p: Next/Prev chapter | q: Quit".to_string()
    });
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, chunks[1]);
}

/// Whether each row is the last among its siblings, for choosing `└──` over `├──`.
fn last_at_depth(rows: &[Row]) -> Vec<bool> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            !rows[i + 1..]
                .iter()
                .take_while(|next| next.depth >= row.depth)
                .any(|next| next.depth == row.depth)
        })
        .collect()
}

/// Generate box-drawing prefix for tree structure
fn get_tree_prefix(depth: usize, is_last: bool, parent_states: &[bool]) -> String {
    if depth == 0 {
        return String::new();
    }

    let mut prefix = String::new();

    // Draw vertical lines for parent levels
    for i in 0..depth.saturating_sub(1) {
        if i < parent_states.len() && parent_states[i] {
            prefix.push_str("│   ");
        } else {
            prefix.push_str("    ");
        }
    }

    if is_last {
        prefix.push_str("└── ");
    } else {
        prefix.push_str("├── ");
    }

    prefix
}
