//! HTTP client for the EmailJS relay
//!
//! Posts template parameters to the EmailJS REST endpoint, which renders the
//! configured template and mails it to the site owner.

use super::{DeliveryError, MessageDelivery, TemplateParams};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// EmailJS REST endpoint for single sends
const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const DEFAULT_SERVICE_ID: &str = "service_scvq32m";
const DEFAULT_TEMPLATE_ID: &str = "template_dawntl7";
const DEFAULT_PUBLIC_KEY: &str = "RZ-3AUkizlIcfNxir";

/// Where and as whom to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsSettings {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// Account public key, sent as `user_id`
    pub public_key: String,
    /// Per-request timeout. `None` waits for the relay indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for EmailJsSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: DEFAULT_SERVICE_ID.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_PUBLIC_KEY.to_string(),
            timeout: None,
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Client for the EmailJS send endpoint
pub struct EmailJsClient {
    http: Client,
    settings: EmailJsSettings,
}

impl EmailJsClient {
    pub fn new(settings: EmailJsSettings) -> Result<Self, DeliveryError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            settings,
        })
    }
}

#[async_trait]
impl MessageDelivery for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<(), DeliveryError> {
        let request = SendRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            template_params: params,
        };

        tracing::debug!(
            endpoint = %self.settings.endpoint,
            template_id = %self.settings.template_id,
            "emailjs: sending contact message"
        );

        let response = self
            .http
            .post(&self.settings.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "emailjs: message accepted");
            return Ok(());
        }

        // EmailJS explains refusals in a plain-text body
        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
