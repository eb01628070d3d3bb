//! Application state and core logic

use crate::config::PortfolioConfig;
use crate::contact::{ContactFormController, PendingDelivery, SettledDelivery};
use crate::content::PROFILE;
use crate::delivery::MessageDelivery;
use crate::state::{AppState, ContactFocus, Notification, Section, Toaster};
use crate::ui::nav_item_at;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Lines moved per mouse wheel notch
const WHEEL_LINES: u16 = 3;
/// Lines moved per PageUp/PageDown
const PAGE_LINES: u16 = 10;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Contact form and its submission flow
    pub contact: ContactFormController,
    /// Finished deliveries flow back to the UI loop through this channel,
    /// still holding the busy flag until `tick` settles them
    outcomes_tx: mpsc::UnboundedSender<SettledDelivery>,
    outcomes_rx: mpsc::UnboundedReceiver<SettledDelivery>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &PortfolioConfig, delivery: Arc<dyn MessageDelivery>) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();

        let mut state = AppState {
            toaster: Toaster::new(config.toast_duration()),
            ..Default::default()
        };
        state.scroll_to(config.start_section());

        Self {
            state,
            contact: ContactFormController::new(delivery, config.recipient_name()),
            outcomes_tx,
            outcomes_rx,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while something on screen is moving and wants fast redraws
    pub fn is_animating(&self) -> bool {
        let now = Instant::now();
        self.state
            .skill_reveal
            .is_some_and(|reveal| !reveal.is_complete_at(now))
    }

    /// Apply settled deliveries and expire toasts. Called once per frame.
    pub fn tick(&mut self) {
        while let Ok(settled) = self.outcomes_rx.try_recv() {
            let notification = self.contact.settle(settled);
            self.state.toaster.push(notification);
        }
        if !self.state.toaster.is_empty() {
            self.state.toaster.prune_expired(Instant::now());
        }
    }

    /// Jump to a section
    pub fn navigate(&mut self, section: Section) {
        tracing::debug!(section = section.id(), "navigate");
        self.state.scroll_to(section);
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.copy_message = None;

        if self.state.is_editing_contact() {
            self.handle_contact_form_key(key);
        } else {
            self.handle_browse_key(key);
        }
    }

    /// Keys while reading the page
    fn handle_browse_key(&mut self, key: KeyEvent) {
        let section = self.state.active_section;

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.dismiss_toast(),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.navigate(section.next()),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.navigate(section.prev()),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(1),
            KeyCode::PageDown => self.state.scroll_down(PAGE_LINES),
            KeyCode::PageUp => self.state.scroll_up(PAGE_LINES),
            KeyCode::Char('y') => self.copy_email(),
            // Hero buttons
            KeyCode::Char('p') if section == Section::Home => self.navigate(Section::Portfolio),
            KeyCode::Char('c') if section == Section::Home => self.navigate(Section::Contact),
            KeyCode::Enter | KeyCode::Char('i') if section == Section::Contact => {
                self.state.focus_contact_form();
            }
            KeyCode::Char(c) => {
                if let Some(target) = c.to_digit(10).and_then(Section::from_number) {
                    self.navigate(target);
                }
            }
            _ => {}
        }
    }

    /// Keys while the contact form has focus
    fn handle_contact_form_key(&mut self, key: KeyEvent) {
        let Some(focus) = self.state.contact_focus else {
            return;
        };

        // Send shortcut works from any field
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_contact();
            return;
        }

        match key.code {
            KeyCode::Esc => self.state.contact_focus = None,
            KeyCode::Tab => self.state.contact_focus = Some(focus.next()),
            KeyCode::BackTab => self.state.contact_focus = Some(focus.prev()),
            KeyCode::Enter => match focus {
                ContactFocus::SendButton => self.submit_contact(),
                ContactFocus::Field(field) if field.is_multiline() => {
                    self.contact.input_char(field, '\n');
                }
                ContactFocus::Field(_) => self.state.contact_focus = Some(focus.next()),
            },
            KeyCode::Backspace => {
                if let ContactFocus::Field(field) = focus {
                    self.contact.backspace(field);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let ContactFocus::Field(field) = focus {
                    self.contact.input_char(field, c);
                }
            }
            _ => {}
        }
    }

    /// Handle mouse input: nav clicks and wheel scrolling
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(section) = nav_item_at(mouse.column, mouse.row) {
                    self.navigate(section);
                }
            }
            MouseEventKind::ScrollDown => self.state.scroll_down(WHEEL_LINES),
            MouseEventKind::ScrollUp => self.state.scroll_up(WHEEL_LINES),
            _ => {}
        }
    }

    /// Validate the form and hand a valid submission to a delivery task
    fn submit_contact(&mut self) {
        // The send button is disabled while a message is in flight
        if self.contact.is_busy() {
            tracing::debug!("contact: send ignored while a delivery is in flight");
            return;
        }

        match self.contact.submit() {
            Ok(pending) => self.spawn_delivery(pending),
            Err(err) => {
                tracing::debug!(error = %err, "contact: validation failed");
                self.state.toaster.push(Notification::from(&err));
            }
        }
    }

    /// Run the delivery off the UI loop; the outcome comes back through `tick`
    fn spawn_delivery(&self, pending: PendingDelivery) {
        let tx = self.outcomes_tx.clone();
        tokio::spawn(async move {
            let settled = pending.deliver().await;
            if tx.send(settled).is_err() {
                tracing::debug!("contact: app closed before delivery settled");
            }
        });
    }

    fn dismiss_toast(&mut self) {
        if let Some(id) = self.state.toaster.current().map(|t| t.id) {
            self.state.toaster.dismiss(id);
        }
    }

    fn copy_email(&mut self) {
        match self.copy_to_clipboard(PROFILE.email) {
            Ok(()) => self.copy_message = Some(format!("Copied {}", PROFILE.email)),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable");
                self.state.toaster.push(Notification::destructive(
                    "Error",
                    "Could not access the clipboard.",
                ));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
