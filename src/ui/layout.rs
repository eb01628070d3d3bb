//! Layout components (nav bar, status bar)

use crate::app::App;
use crate::contact::SubmissionStatus;
use crate::state::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Brand shown at the left of the nav bar
const BRAND: &str = "BOYA SIVA SAI KUMAR";
/// Spaces between the brand and the first nav item
const BRAND_GAP: u16 = 4;
/// Column of the first nav item: border + brand + gap
const NAV_ITEMS_X: u16 = 1 + BRAND.len() as u16 + BRAND_GAP;
/// Row holding the nav items, inside the top border
const NAV_ROW: u16 = 1;

/// Split the screen into nav bar, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nav bar
            Constraint::Min(0),    // Section content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Width of a nav item: label plus one space each side
fn nav_item_width(section: Section) -> u16 {
    section.label().len() as u16 + 2
}

/// Which nav item, if any, sits at a screen position
pub fn nav_item_at(column: u16, row: u16) -> Option<Section> {
    if row != NAV_ROW {
        return None;
    }

    let mut x = NAV_ITEMS_X;
    for section in Section::ALL {
        let width = nav_item_width(section);
        if (x..x + width).contains(&column) {
            return Some(section);
        }
        x += width + 1;
    }
    None
}

/// Draw the nav bar; the active section is highlighted
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            BRAND,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(BRAND_GAP as usize)),
    ];

    for section in Section::ALL {
        let style = if section == app.state.active_section {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", section.label()), style));
        spans.push(Span::raw(" "));
    }

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(nav, area);
}

/// Draw key hints and transient feedback
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.state.is_editing_contact() {
        format!(
            "Tab: next field | Enter: newline / send | {}: send | Esc: leave form",
            crate::platform::SEND_SHORTCUT
        )
    } else if app.state.active_section == Section::Contact {
        "Enter: write a message | y: copy email | 1-6 / ←→: sections | q: quit".to_string()
    } else {
        "1-6 / ←→: sections | ↑↓: scroll | y: copy email | q: quit".to_string()
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];

    if app.contact.status() == SubmissionStatus::Submitting {
        spans.push(Span::styled(
            "  Sending...",
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(msg) = &app.copy_message {
        spans.push(Span::styled(
            format!("  {msg}"),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
