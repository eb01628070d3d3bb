//! Application state module

mod app_state;
mod skill_reveal;
mod toast;

pub use app_state::*;
pub use skill_reveal::*;
pub use toast::*;
