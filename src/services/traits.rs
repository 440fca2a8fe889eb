//! Trait abstractions over the outbound services to enable mocking in tests

use crate::contact::ContactPayload;
use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

/// Opaque acknowledgment returned by the email service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt(String);

impl DeliveryReceipt {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Display for DeliveryReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Delivers contact messages
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send one message built from the contact form
    async fn send(&self, payload: &ContactPayload) -> Result<DeliveryReceipt>;
}

/// Generates text from a prompt
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Return the generated text; may be empty
    async fn generate(&self, prompt: &str) -> Result<String>;
}
