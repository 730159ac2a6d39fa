//! Common test utilities for integration tests.

use nexmo_call::{CallClient, ClientConfig, Credentials};
use wiremock::MockServer;

/// Start a mock Nexmo server.
pub async fn mock_nexmo_server() -> MockServer {
    MockServer::start().await
}

/// Configuration pointing at a mock server's call endpoint.
pub fn test_config(mock_server: &MockServer) -> ClientConfig {
    ClientConfig {
        endpoint: format!("{}/call/json", mock_server.uri()),
        ..ClientConfig::default()
    }
}

/// Create a call client for a mock server.
pub fn test_call_client(mock_server: &MockServer) -> CallClient {
    CallClient::with_config(
        Credentials::new("test-api-key", "test-api-secret"),
        test_config(mock_server),
    )
    .unwrap()
}
