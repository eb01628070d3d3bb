//! About section: background and education

use super::components::card;
use crate::app::App;
use crate::content::{BACKGROUND, EDUCATION};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let scroll = (app.state.scroll_offset, 0);

    let mut background = Vec::new();
    for paragraph in BACKGROUND {
        background.push(Line::from(Span::styled(
            *paragraph,
            Style::default().fg(Color::Gray),
        )));
        background.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(background)
            .wrap(Wrap { trim: true })
            .scroll(scroll)
            .block(card("Background")),
        chunks[0],
    );

    let mut education = Vec::new();
    for entry in EDUCATION {
        education.push(Line::from(Span::styled(
            entry.degree,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )));
        education.push(Line::from(Span::styled(
            entry.institution,
            Style::default().fg(Color::Gray),
        )));
        education.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(education)
            .wrap(Wrap { trim: true })
            .scroll(scroll)
            .block(card("Education")),
        chunks[1],
    );
}
