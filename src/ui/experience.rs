//! Experience & certifications section

use super::components::card;
use crate::app::App;
use crate::content::EXPERIENCE;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();

    for entry in EXPERIENCE {
        lines.push(Line::from(vec![
            Span::styled("★ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                entry.organization,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            entry.role,
            Style::default().fg(Color::Blue),
        )));
        if let Some(period) = entry.period {
            lines.push(Line::from(Span::styled(
                period,
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(Span::styled(
            entry.description,
            Style::default().fg(Color::Gray),
        )));
        for (label, value) in entry.details {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
                Span::raw(*value),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((app.state.scroll_offset, 0))
            .block(card("Experience & Certifications")),
        area,
    );
}
