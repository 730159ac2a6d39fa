//! Client configuration.

use serde::Deserialize;
use std::time::Duration;

/// Nexmo voice call endpoint (JSON interface).
pub const DEFAULT_ENDPOINT: &str = "https://rest.nexmo.com/call/json";

/// Call client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Endpoint the call request is posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Verify the server's TLS certificate (primary transport only).
    /// Off by default for compatibility with older deployments.
    #[serde(default)]
    pub verify_tls: bool,

    /// Primary transport is available
    #[serde(default = "default_true")]
    pub primary_transport: bool,

    /// One-shot fallback transport may be used when the primary is not
    #[serde(default = "default_true")]
    pub allow_fallback: bool,

    /// Request timeout; none by default
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            verify_tls: false,
            primary_transport: default_true(),
            allow_fallback: default_true(),
            timeout: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_true() -> bool {
    true
}
