//! Integration tests for placing calls against a mock Nexmo endpoint.

mod common;

use common::{mock_nexmo_server, test_call_client};
use nexmo_call::CallError;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_successive_calls_overwrite_last_response() {
    let server = mock_nexmo_server().await;

    Mock::given(method("POST"))
        .and(path("/call/json"))
        .and(body_string_contains("to=447700900001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "call-id": "first-call",
            "status": "0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/call/json"))
        .and(body_string_contains("to=447700900002"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "call-id": "second-call",
            "status": "0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = test_call_client(&server);

    let first = client
        .place_call("447700900001", "447700900999", "https://example.com/answer")
        .await
        .unwrap();
    assert_eq!(first.call_id(), Some("first-call"));

    let second = client
        .place_call("447700900002", "447700900999", "https://example.com/answer")
        .await
        .unwrap();
    assert_eq!(second.call_id(), Some("second-call"));
    assert_eq!(
        client.last_response().and_then(|r| r.call_id()),
        Some("second-call")
    );
}

#[tokio::test]
async fn test_empty_body_is_parse_error() {
    let server = mock_nexmo_server().await;

    Mock::given(method("POST"))
        .and(path("/call/json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = test_call_client(&server);
    let result = client
        .place_call("447700900000", "NEXMO", "https://example.com/answer")
        .await;

    let err = result.unwrap_err();
    assert!(err.is_parse_error());
    assert!(matches!(err, CallError::Json(_)));
    assert!(client.last_response().is_none());
}

#[tokio::test]
async fn test_alphanumeric_originator_is_truncated_on_the_wire() {
    let server = mock_nexmo_server().await;

    Mock::given(method("POST"))
        .and(path("/call/json"))
        .and(body_string_contains("from=PrawnSaladL&"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"call-id": "abc"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = test_call_client(&server);
    let response = client
        .place_call("447700900000", "Prawn Salad Ltd.", "https://example.com/answer")
        .await
        .unwrap();

    assert_eq!(response.call_id(), Some("abc"));
}
