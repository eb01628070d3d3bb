//! Outbound message delivery

mod emailjs;
mod error;
mod traits;

pub use emailjs::{EmailJsClient, EmailJsSettings};
pub use error::DeliveryError;
pub use traits::{MessageDelivery, TemplateParams};

#[cfg(test)]
pub use traits::MockMessageDelivery;
