//! Runner configuration loaded from environment variables.

use anyhow::{Context, Result};
use nexmo_call::{ClientConfig, Credentials, DEFAULT_ENDPOINT};
use serde::Deserialize;
use std::time::Duration;

/// Runner configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Nexmo account and client configuration
    pub nexmo: NexmoConfig,

    /// The call to place
    pub call: CallConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NexmoConfig {
    /// Nexmo API key
    pub api_key: String,

    /// Nexmo API secret
    pub api_secret: String,

    /// Call endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Verify Nexmo's TLS certificate
    #[serde(default)]
    pub verify_tls: bool,

    /// Primary transport available
    #[serde(default = "default_true")]
    pub primary_transport: bool,

    /// Allow the one-shot fallback transport
    #[serde(default = "default_true")]
    pub allow_fallback: bool,

    /// Request timeout (unset means wait indefinitely)
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallConfig {
    /// Destination number
    pub to: String,

    /// Originator (number or alphanumeric sender ID)
    pub from: String,

    /// URL Nexmo fetches call instructions from once answered
    pub answer_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl NexmoConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.api_key, &self.api_secret)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            verify_tls: self.verify_tls,
            primary_transport: self.primary_transport,
            allow_fallback: self.allow_fallback,
            timeout: self.timeout,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Keep "+44..." style numbers as strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
