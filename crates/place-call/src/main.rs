//! Place a single Nexmo voice call - Main entry point.

mod config;
mod error;

use crate::config::Config;
use crate::error::AppResult;
use anyhow::Context;
use nexmo_call::CallClient;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log.level);

    let mut client =
        CallClient::with_config(config.nexmo.credentials(), config.nexmo.client_config())?;

    info!(
        "Placing call to {} via {}",
        config.call.to,
        client.transport_name().unwrap_or("no transport")
    );

    let response = client
        .place_call(
            &config.call.to,
            config.call.from.as_bytes(),
            &config.call.answer_url,
        )
        .await?;

    if response.is_accepted() {
        info!(
            "Call accepted - ID: {}",
            response.call_id().unwrap_or("unknown")
        );
    } else {
        warn!(
            "Call rejected (status {}): {}",
            response.status().as_deref().unwrap_or("unknown"),
            response.error_text().unwrap_or("no error text")
        );
    }

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
