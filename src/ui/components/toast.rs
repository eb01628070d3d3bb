//! Toast overlay

use crate::state::{Toast, ToastVariant};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 48;

/// Render the toast in the bottom-right corner, above the status bar
pub fn render_toast(frame: &mut Frame, toast: &Toast) {
    let area = frame.area();
    let accent = match toast.notification.variant {
        ToastVariant::Default => Color::Green,
        ToastVariant::Destructive => Color::Red,
    };

    let width = MAX_WIDTH.min(area.width);
    let padding = 4u16; // 2 chars padding on each side
    let wrapped = wrap_text(
        &toast.notification.description,
        width.saturating_sub(padding) as usize,
    );

    // Title + message lines + borders
    let height = (1 + wrapped.len() as u16 + 2).min(area.height.saturating_sub(1));
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    frame.render_widget(Clear, toast_area);

    let mut content = vec![Line::from(Span::styled(
        toast.notification.title.as_str(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ))];
    content.extend(wrapped.into_iter().map(Line::from));

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(paragraph, toast_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.len() + word.len() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        lines.push(current_line);
    }

    lines
}
