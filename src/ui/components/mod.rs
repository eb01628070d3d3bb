//! Reusable UI components

mod button;
mod card;
mod field;
mod toast;

pub use button::{render_button, BUTTON_HEIGHT};
pub use card::card;
pub use field::draw_field;
pub use toast::render_toast;
