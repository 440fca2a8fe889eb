//! EmailJS REST client
//!
//! Sends the contact form as template parameters through an EmailJS
//! service/template pair. Credentials come from [`crate::config::StudioConfig`].

use super::traits::{DeliveryReceipt, EmailSender};
use crate::config::EmailCredentials;
use crate::contact::ContactPayload;
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use serde::Serialize;

/// Default EmailJS send endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// Client for the EmailJS send API
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: Option<EmailCredentials>,
}

impl EmailJsClient {
    pub fn new(
        http: reqwest::Client,
        endpoint: Option<String>,
        credentials: Option<EmailCredentials>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            credentials,
        }
    }

    fn request<'a>(
        credentials: &'a EmailCredentials,
        payload: &'a ContactPayload,
    ) -> SendRequest<'a> {
        SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: payload,
        }
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(&self, payload: &ContactPayload) -> Result<DeliveryReceipt> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| anyhow!("Email delivery is not configured"))?;

        let response = self
            .http
            .post(&self.endpoint)
            .json(&Self::request(credentials, payload))
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach email service: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read email service response")?;

        if !status.is_success() {
            bail!("Email service rejected the message ({}): {}", status, body);
        }

        Ok(DeliveryReceipt::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Amina".to_string(),
            email: "amina@example.co.ke".to_string(),
            message: "A logo for my bakery".to_string(),
            time: "Monday, 19 October 2026 at 14:05".to_string(),
        }
    }

    fn credentials() -> EmailCredentials {
        EmailCredentials {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let credentials = credentials();
        let payload = payload();
        let body = serde_json::to_value(EmailJsClient::request(&credentials, &payload)).unwrap();

        assert_eq!(
            body,
            json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "name": "Amina",
                    "email": "amina@example.co.ke",
                    "message": "A logo for my bakery",
                    "time": "Monday, 19 October 2026 at 14:05"
                }
            })
        );
    }

    #[test]
    fn test_default_endpoint() {
        let client = EmailJsClient::new(reqwest::Client::new(), None, None);
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn test_send_without_credentials_fails() {
        let client = EmailJsClient::new(reqwest::Client::new(), None, None);

        let err = tokio_test::assert_err!(client.send(&payload()).await);

        assert!(err.to_string().contains("not configured"));
    }
}
