//! Delivery failure kinds

use thiserror::Error;

/// Raised when the relay did not accept a message
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Connection, TLS or timeout failure before a response arrived
    #[error("email relay unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The relay answered with a non-success status
    #[error("email relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The task running the delivery died before reporting back
    #[error("delivery task failed: {0}")]
    Task(String),
}
