//! Contact section: details on the left, message form on the right

use super::components::{card, draw_field, render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::contact::ContactField;
use crate::content::{CONTACT_BLURB, FOOTER, PROFILE};
use crate::state::ContactFocus;
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
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_details(frame, chunks[0], app);
    draw_form(frame, chunks[1], app);
}

fn draw_details(frame: &mut Frame, area: Rect, app: &App) {
    let detail = |label: &'static str, value: &'static str| {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), Style::default().fg(Color::Blue)),
            Span::raw(value),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            "Let's Connect",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(CONTACT_BLURB, Style::default().fg(Color::Gray))),
        Line::from(""),
        detail("Email", PROFILE.email),
        detail("Phone", PROFILE.phone),
        detail("Location", PROFILE.location),
        Line::from(""),
        Line::from(Span::styled(
            "[y] copy email",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(FOOTER, Style::default().fg(Color::DarkGray))),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((app.state.scroll_offset, 0))
            .block(card("Get In Touch")),
        area,
    );
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = card("Send a Message");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Send
        ])
        .split(inner);

    let form = app.contact.form();
    let focus = app.state.contact_focus;
    for (field, chunk) in ContactField::ALL.into_iter().zip(chunks.iter()) {
        let is_active = focus == Some(ContactFocus::Field(field));
        draw_field(frame, *chunk, field, form.get(field), is_active);
    }

    let busy = app.contact.is_busy();
    let label = if busy { "Sending..." } else { "Send Message" };
    let button_area = Rect {
        width: chunks[3].width.min(24),
        ..chunks[3]
    };
    render_button(
        frame,
        button_area,
        label,
        focus == Some(ContactFocus::SendButton),
        !busy,
    );
}
