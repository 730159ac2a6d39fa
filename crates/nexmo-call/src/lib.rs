//! Nexmo voice call client.

mod client;
mod config;
mod error;
mod normalize;
mod originator;
mod transport;
mod types;

pub use client::CallClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::CallError;
pub use normalize::normalize_keys;
pub use originator::{decode_originator, validate_originator};
pub use transport::{select_transport, OneShotTransport, ReqwestTransport, Transport};
pub use types::*;
