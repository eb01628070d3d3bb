//! Configuration handling for the TUI

use crate::delivery::EmailJsSettings;
use crate::state::{Section, DEFAULT_TOAST_DURATION};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides the relay endpoint
const ENDPOINT_ENV: &str = "PORTFOLIO_EMAILJS_ENDPOINT";

/// Name the contact form addresses messages to
const DEFAULT_RECIPIENT_NAME: &str = "Boya Siva Sai Kumar";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortfolioConfig {
    /// EmailJS send endpoint
    pub emailjs_endpoint: Option<String>,
    /// EmailJS service id
    pub emailjs_service_id: Option<String>,
    /// EmailJS template id
    pub emailjs_template_id: Option<String>,
    /// EmailJS account public key
    pub emailjs_public_key: Option<String>,
    /// Value of the `to_name` template parameter
    pub recipient_name: Option<String>,
    /// Seconds a toast stays on screen
    pub toast_duration_secs: Option<u64>,
    /// Give up on the relay after this many seconds
    pub request_timeout_secs: Option<u64>,
    /// Section id shown at startup
    pub start_section: Option<String>,
}

impl PortfolioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "siva1511", "portfolio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PortfolioConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Relay settings: environment, then file, then built-in defaults
    pub fn emailjs_settings(&self) -> EmailJsSettings {
        self.emailjs_settings_with_env(std::env::var(ENDPOINT_ENV).ok())
    }

    fn emailjs_settings_with_env(&self, env_endpoint: Option<String>) -> EmailJsSettings {
        let defaults = EmailJsSettings::default();
        EmailJsSettings {
            endpoint: env_endpoint
                .or_else(|| self.emailjs_endpoint.clone())
                .unwrap_or(defaults.endpoint),
            service_id: self
                .emailjs_service_id
                .clone()
                .unwrap_or(defaults.service_id),
            template_id: self
                .emailjs_template_id
                .clone()
                .unwrap_or(defaults.template_id),
            public_key: self
                .emailjs_public_key
                .clone()
                .unwrap_or(defaults.public_key),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn recipient_name(&self) -> &str {
        self.recipient_name
            .as_deref()
            .unwrap_or(DEFAULT_RECIPIENT_NAME)
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOAST_DURATION)
    }

    /// Startup section, falling back to Home for unknown ids
    pub fn start_section(&self) -> Section {
        match self.start_section.as_deref() {
            Some(id) => Section::from_id(id).unwrap_or_else(|| {
                tracing::warn!(id, "unknown start_section, showing home");
                Section::Home
            }),
            None => Section::Home,
        }
    }
}
