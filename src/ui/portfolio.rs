//! Portfolio section: project cards

use super::components::card;
use crate::app::App;
use crate::content::{Project, PROJECTS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = PROJECTS.iter().flat_map(project_lines).collect();

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((app.state.scroll_offset, 0))
            .block(card("Portfolio")),
        area,
    );
}

fn project_lines(project: &Project) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        project.title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(link) = project.link {
        lines.push(Line::from(Span::styled(
            format!("↗ {link}"),
            Style::default().fg(Color::Blue),
        )));
    }

    lines.push(Line::from(Span::styled(
        project.summary,
        Style::default().fg(Color::Gray),
    )));

    if !project.stats.is_empty() {
        lines.push(Line::from(""));
        let mut stats = Vec::new();
        for (value, caption) in project.stats {
            stats.push(Span::styled(
                *value,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ));
            stats.push(Span::styled(
                format!(" {caption}   "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(stats));
    }

    if !project.features.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Key Features:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            project
                .features
                .iter()
                .map(|f| Line::from(format!("• {f}"))),
        );
    }

    lines.push(Line::from(""));
    lines.push(badge_line(project.tags));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines
}

/// Tags rendered as inline badges
pub fn badge_line(tags: &[&'static str]) -> Line<'static> {
    let mut spans = Vec::new();
    for tag in tags {
        spans.push(Span::styled(
            format!(" {tag} "),
            Style::default().fg(Color::Black).bg(Color::Blue),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
