//! Contact form field values and validation

use thiserror::Error;

/// Identifies one of the three contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// All fields in tab order
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "your.email@example.com",
            Self::Message => "Your message...",
        }
    }

    /// Only the message body accepts newlines
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

/// Raised when a submit is attempted with one or more empty fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("please fill in all fields (missing: {})", missing_labels(.missing))]
pub struct ValidationError {
    pub missing: Vec<ContactField>,
}

fn missing_labels(missing: &[ContactField]) -> String {
    missing
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Current user input in the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Fields holding the empty string. Whitespace counts as content.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}
