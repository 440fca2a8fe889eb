//! HTTP clients for the email delivery and text generation services

mod email;
mod generation;
mod traits;

pub use email::EmailJsClient;
pub use generation::GeminiClient;
pub use traits::{DeliveryReceipt, EmailSender, TextGenerator};

#[cfg(test)]
pub use traits::{MockEmailSender, MockTextGenerator};

use anyhow::{Context, Result};
use std::time::Duration;

/// Shared HTTP client with a bounded per-request timeout
pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("studio-tui/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}
