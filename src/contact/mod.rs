//! Contact form domain: input state, validation and the submission flow

mod busy;
mod controller;
mod form;

pub use controller::{ContactFormController, PendingDelivery, SettledDelivery, SubmissionStatus};
pub use form::{ContactField, FormState};
