//! Hero section

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::content::PROFILE;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Intro
            Constraint::Length(BUTTON_HEIGHT), // Hero buttons
            Constraint::Length(PROFILE.links.len() as u16 + 1), // Links
        ])
        .split(area.inner(Margin::new(2, 1)));

    let intro = vec![
        Line::from(""),
        Line::from(Span::styled(
            PROFILE.name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            PROFILE.headline,
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        Line::from(Span::styled(
            PROFILE.tagline,
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(intro)
            .wrap(Wrap { trim: true })
            .scroll((app.state.scroll_offset, 0)),
        chunks[0],
    );

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Length(2),
            Constraint::Length(20),
            Constraint::Min(0),
        ])
        .split(chunks[1]);
    render_button(frame, buttons[0], "[p] View Portfolio →", true, true);
    render_button(frame, buttons[2], "[c] Contact Me", false, true);

    let mut links = vec![Line::from("")];
    links.extend(PROFILE.links.iter().map(|(label, url)| {
        Line::from(vec![
            Span::styled(format!("{label:<9}"), Style::default().fg(Color::Blue)),
            Span::styled(*url, Style::default().fg(Color::DarkGray)),
        ])
    }));
    frame.render_widget(Paragraph::new(links), chunks[2]);
}
