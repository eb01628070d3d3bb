//! Contact form input rendering

use crate::contact::ContactField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one input box with its label, placeholder and cursor
pub fn draw_field(frame: &mut Frame, area: Rect, field: ContactField, value: &str, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(
            if is_active { "" } else { field.placeholder() },
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        // split keeps a trailing empty line so the cursor follows a newline
        value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect()
    };
    if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    // Keep the cursor line in view for long messages
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height.max(1)) as u16;

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}
