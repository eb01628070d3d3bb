//! Trait abstraction for message delivery to enable mocking in tests

use super::DeliveryError;
use crate::contact::FormState;
use async_trait::async_trait;
use serde::Serialize;

/// Named template fields sent to the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
}

impl TemplateParams {
    /// Map the form fields onto the template, addressed to `to_name`
    pub fn from_form(form: &FormState, to_name: &str) -> Self {
        Self {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            message: form.message.clone(),
            to_name: to_name.to_string(),
        }
    }
}

/// Sends a contact message somewhere a human will read it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    /// Deliver one message. Resolves once the relay has accepted or refused it.
    async fn send(&self, params: &TemplateParams) -> Result<(), DeliveryError>;
}
