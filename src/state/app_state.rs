//! Application state definitions

use super::{SkillReveal, Toaster};
use crate::contact::ContactField;

/// Page section, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Portfolio,
    Skills,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Portfolio,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    /// Anchor id of the section
    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Portfolio => "Portfolio",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Section for a 1-based number key
    pub fn from_number(n: u32) -> Option<Self> {
        (n as usize)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Next section, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Focus within the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFocus {
    Field(ContactField),
    SendButton,
}

impl ContactFocus {
    const ORDER: [ContactFocus; 4] = [
        ContactFocus::Field(ContactField::Name),
        ContactFocus::Field(ContactField::Email),
        ContactFocus::Field(ContactField::Message),
        ContactFocus::SendButton,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub active_section: Section,
    pub scroll_offset: u16,

    // Contact form focus, `None` when not editing
    pub contact_focus: Option<ContactFocus>,

    // Overlays
    pub toaster: Toaster,
    pub skill_reveal: Option<SkillReveal>,
}

impl AppState {
    /// Jump to a section and highlight it in the nav bar
    pub fn scroll_to(&mut self, section: Section) {
        if section != Section::Contact {
            self.contact_focus = None;
        }
        if section == Section::Skills && self.active_section != Section::Skills {
            self.skill_reveal = Some(SkillReveal::new());
        }
        self.active_section = section;
        self.scroll_offset = 0;
    }

    pub fn is_editing_contact(&self) -> bool {
        self.contact_focus.is_some()
    }

    /// Start editing the contact form at the name field
    pub fn focus_contact_form(&mut self) {
        self.scroll_to(Section::Contact);
        self.contact_focus = Some(ContactFocus::Field(ContactField::Name));
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}
