//! Nexmo voice call client.

use crate::config::ClientConfig;
use crate::error::CallError;
use crate::originator::{decode_originator, validate_originator};
use crate::transport::{select_transport, Transport};
use crate::types::*;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Places outbound voice calls through Nexmo.
///
/// Credentials are fixed at construction. The client keeps the most recent
/// normalized response; `place_call` takes `&mut self`, so one call at a time
/// per instance.
#[derive(Clone)]
pub struct CallClient {
    credentials: Credentials,
    endpoint: String,
    transport: Option<Arc<dyn Transport>>,
    last_response: Option<CallResponse>,
}

impl CallClient {
    /// Create a client with default configuration.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, CallError> {
        let credentials = Credentials::new(api_key, api_secret);
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client, selecting the transport from `config`.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self, CallError> {
        let transport = select_transport(&config)?;

        Ok(Self {
            credentials,
            endpoint: config.endpoint,
            transport,
            last_response: None,
        })
    }

    /// Create a client around a caller-supplied transport.
    pub fn with_transport(
        credentials: Credentials,
        endpoint: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            credentials,
            endpoint: endpoint.into(),
            transport: Some(transport),
            last_response: None,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Name of the selected transport, if any.
    pub fn transport_name(&self) -> Option<&'static str> {
        self.transport.as_ref().map(|t| t.name())
    }

    /// Most recent normalized response. `None` before the first call and
    /// after a call that produced no usable response.
    pub fn last_response(&self) -> Option<&CallResponse> {
        self.last_response.as_ref()
    }

    /// Place a voice call to `to`, presenting `from` as the originator.
    ///
    /// `answer_url` is handed to Nexmo unchanged. Returns the normalized
    /// reply, which is also kept as the last response.
    #[instrument(skip(self, from), fields(endpoint = %self.endpoint))]
    pub async fn place_call(
        &mut self,
        to: &str,
        from: impl AsRef<[u8]>,
        answer_url: &str,
    ) -> Result<CallResponse, CallError> {
        let from = decode_originator(from.as_ref()).map_err(|e| {
            warn!("Rejected originator: not numeric or valid UTF-8");
            e
        })?;
        let from = validate_originator(from);
        debug!("Normalized originator: {:?}", from);

        let transport = self
            .transport
            .clone()
            .ok_or(CallError::TransportUnavailable)?;

        let request = CallRequest::new(to, from, answer_url);
        let form = request.form_fields(&self.credentials);

        let result = match transport.post_form(&self.endpoint, &form).await {
            Ok(body) => {
                debug!("Response body: {}", body.chars().take(200).collect::<String>());
                CallResponse::parse(&body)
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(response) => {
                self.last_response = Some(response.clone());
                Ok(response)
            }
            Err(e) => {
                warn!("Call request failed: {}", e);
                self.last_response = None;
                Err(e)
            }
        }
    }
}
