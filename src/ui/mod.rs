//! UI module for rendering the TUI

mod about;
mod components;
mod contact;
mod experience;
mod home;
mod layout;
mod portfolio;
mod skills;

pub use layout::nav_item_at;

use crate::app::App;
use crate::state::Section;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (nav_area, content_area, status_area) = layout::create_layout(frame.area());

    layout::draw_nav_bar(frame, nav_area, app);

    match app.state.active_section {
        Section::Home => home::draw(frame, content_area, app),
        Section::About => about::draw(frame, content_area, app),
        Section::Portfolio => portfolio::draw(frame, content_area, app),
        Section::Skills => skills::draw(frame, content_area, app),
        Section::Experience => experience::draw(frame, content_area, app),
        Section::Contact => contact::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Toast overlays everything else
    if let Some(toast) = app.state.toaster.current() {
        components::render_toast(frame, toast);
    }
}
