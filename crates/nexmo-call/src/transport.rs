//! HTTP transports used to post call requests.

use crate::config::ClientConfig;
use crate::error::CallError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use urlencoding::encode;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Something that can POST a form and hand back the response body.
///
/// Any body the server returns is passed through, whatever the status code.
/// An error means no body was received at all.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn post_form(
        &self,
        url: &str,
        form: &[(&'static str, String)],
    ) -> Result<String, CallError>;
}

/// Primary transport: one reqwest client built up front.
///
/// Idle connections are not kept, so every call opens and closes its own.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(verify_tls: bool, timeout: Option<Duration>) -> Result<Self, CallError> {
        if !verify_tls {
            warn!("TLS certificate verification is disabled for Nexmo requests");
        }

        let client = base_builder(timeout)
            .danger_accept_invalid_certs(!verify_tls)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(&'static str, String)],
    ) -> Result<String, CallError> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| CallError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Nexmo returned HTTP {}", status);
        }

        response
            .text()
            .await
            .map_err(|e| CallError::Transport(e.to_string()))
    }
}

/// Fallback transport: a fresh client per request, body encoded by hand.
///
/// Always verifies TLS certificates.
#[derive(Clone, Debug, Default)]
pub struct OneShotTransport {
    timeout: Option<Duration>,
}

impl OneShotTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Transport for OneShotTransport {
    fn name(&self) -> &'static str {
        "one-shot"
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(&'static str, String)],
    ) -> Result<String, CallError> {
        let client = base_builder(self.timeout).build()?;

        let response = client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(encode_form(form))
            .send()
            .await
            .map_err(|e| CallError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Nexmo returned HTTP {}", status);
        }

        response
            .text()
            .await
            .map_err(|e| CallError::Transport(e.to_string()))
    }
}

/// Pick the transport once, from configuration.
///
/// Returns `None` when neither transport may be used.
pub fn select_transport(config: &ClientConfig) -> Result<Option<Arc<dyn Transport>>, CallError> {
    let transport = if config.primary_transport {
        let primary = ReqwestTransport::new(config.verify_tls, config.timeout)?;
        Some(Arc::new(primary) as Arc<dyn Transport>)
    } else if config.allow_fallback {
        Some(Arc::new(OneShotTransport::new(config.timeout)) as Arc<dyn Transport>)
    } else {
        None
    };

    match &transport {
        Some(t) => debug!("Using {} transport", t.name()),
        None => warn!("No HTTP transport available, calls will fail"),
    }

    Ok(transport)
}

fn base_builder(timeout: Option<Duration>) -> ClientBuilder {
    let builder = Client::builder().pool_max_idle_per_host(0);
    match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    }
}

/// Encode form pairs as `application/x-www-form-urlencoded`.
fn encode_form(form: &[(&'static str, String)]) -> String {
    form.iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_form_escapes_values() {
        let form = vec![
            ("from", "NEXMO1".to_string()),
            ("answer_url", "https://example.com/answer?x=1&y=2".to_string()),
        ];

        assert_eq!(
            encode_form(&form),
            "from=NEXMO1&answer_url=https%3A%2F%2Fexample.com%2Fanswer%3Fx%3D1%26y%3D2"
        );
    }

    #[test]
    fn test_encode_form_empty() {
        assert_eq!(encode_form(&[]), "");
    }

    #[test]
    fn test_select_primary_by_default() {
        let transport = select_transport(&ClientConfig::default()).unwrap();
        assert_eq!(transport.unwrap().name(), "reqwest");
    }

    #[test]
    fn test_select_fallback_when_primary_unavailable() {
        let config = ClientConfig {
            primary_transport: false,
            ..ClientConfig::default()
        };

        let transport = select_transport(&config).unwrap();
        assert_eq!(transport.unwrap().name(), "one-shot");
    }

    #[test]
    fn test_select_none_when_fallback_not_allowed() {
        let config = ClientConfig {
            primary_transport: false,
            allow_fallback: false,
            ..ClientConfig::default()
        };

        assert!(select_transport(&config).unwrap().is_none());
    }
}
