//! Request and response types for the Nexmo call API.

use crate::error::CallError;
use crate::normalize::normalize_keys;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};

/// Nexmo account credentials.
///
/// The secret is stored using `SecretString` so it stays out of debug
/// output and logs.
#[derive(Debug, Clone)]
pub struct Credentials {
    key: String,
    secret: SecretString,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: SecretString::new(secret.into()),
        }
    }

    /// Account API key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Outbound call parameters, with the originator already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRequest {
    pub to: String,
    pub from: String,
    pub answer_url: String,
}

impl CallRequest {
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        answer_url: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            answer_url: answer_url.into(),
        }
    }

    /// Form fields sent to Nexmo. The API takes credentials in the body.
    pub fn form_fields(&self, credentials: &Credentials) -> Vec<(&'static str, String)> {
        vec![
            ("from", self.from.clone()),
            ("to", self.to.clone()),
            ("answer_url", self.answer_url.clone()),
            ("username", credentials.key.clone()),
            ("password", credentials.secret.expose_secret().clone()),
        ]
    }
}

/// Decoded Nexmo reply with every `-` in its keys replaced by `_`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CallResponse(Value);

impl CallResponse {
    /// Decode and normalize a response body.
    ///
    /// Anything other than an object or a non-empty array is treated as an
    /// unusable reply.
    pub fn parse(body: &str) -> Result<Self, CallError> {
        let raw: Value = serde_json::from_str(body)?;

        match normalize_keys(raw) {
            value @ Value::Object(_) => Ok(Self(value)),
            Value::Array(items) if !items.is_empty() => Ok(Self(Value::Array(items))),
            _ => Err(CallError::EmptyResponse),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Look up a top-level field (first element for array replies).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.record().and_then(|record| record.get(key))
    }

    /// Call identifier assigned by Nexmo.
    pub fn call_id(&self) -> Option<&str> {
        self.get("call_id").and_then(Value::as_str)
    }

    /// Status code as reported, `"0"` meaning the call was accepted.
    pub fn status(&self) -> Option<String> {
        match self.get("status")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn error_text(&self) -> Option<&str> {
        self.get("error_text").and_then(Value::as_str)
    }

    pub fn is_accepted(&self) -> bool {
        self.status().as_deref() == Some("0")
    }

    fn record(&self) -> Option<&Map<String, Value>> {
        match &self.0 {
            Value::Object(map) => Some(map),
            Value::Array(items) => items.first().and_then(Value::as_object),
            _ => None,
        }
    }
}
