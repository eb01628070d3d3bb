//! Skills section: proficiency bars and badges

use super::components::card;
use super::portfolio::badge_line;
use crate::app::App;
use crate::content::{SkillGroup, SkillSet, SKILLS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    widgets::{LineGauge, Paragraph, Wrap},
    Frame,
};

/// Rows a group needs: borders plus one row per bar, or a wrapped badge line
fn group_height(group: &SkillGroup) -> u16 {
    match &group.set {
        SkillSet::Bars { skills, .. } => skills.len() as u16 + 2,
        SkillSet::Badges(_) => 4,
    }
}

fn bar_color(level: f64) -> Color {
    if level >= 0.75 {
        Color::Blue
    } else {
        Color::Green
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let progress = app
        .state
        .skill_reveal
        .map(|reveal| reveal.progress())
        .unwrap_or(1.0) as f64;

    let mut constraints: Vec<Constraint> = SKILLS
        .iter()
        .map(|g| Constraint::Length(group_height(g)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (group, chunk) in SKILLS.iter().zip(chunks.iter()) {
        let block = card(group.title);
        let inner = block.inner(*chunk);
        frame.render_widget(block, *chunk);

        match &group.set {
            SkillSet::Bars { skills, level } => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints(skills.iter().map(|_| Constraint::Length(1)))
                    .split(inner);
                let ratio = (level * progress).clamp(0.0, 1.0);
                for (skill, row) in skills.iter().zip(rows.iter()) {
                    let gauge = LineGauge::default()
                        .filled_style(Style::default().fg(bar_color(*level)))
                        .unfilled_style(Style::default().fg(Color::DarkGray))
                        .line_set(symbols::line::THICK)
                        .label(format!("{skill:<10}"))
                        .ratio(ratio);
                    frame.render_widget(gauge, *row);
                }
            }
            SkillSet::Badges(badges) => {
                frame.render_widget(
                    Paragraph::new(badge_line(badges)).wrap(Wrap { trim: true }),
                    inner,
                );
            }
        }
    }
}
