//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Request timeout used when the config does not set one
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const LOG_FILE: &str = "studio-tui.log";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StudioConfig {
    /// EmailJS service id
    pub emailjs_service_id: Option<String>,
    /// EmailJS template id
    pub emailjs_template_id: Option<String>,
    /// EmailJS public key
    pub emailjs_public_key: Option<String>,
    /// Override for the EmailJS send endpoint
    pub emailjs_endpoint: Option<String>,
    /// Gemini API key
    pub gemini_api_key: Option<String>,
    /// Gemini model name
    pub gemini_model: Option<String>,
    /// Override for the Gemini API base URL
    pub gemini_endpoint: Option<String>,
    /// Per-request timeout for both services, in seconds
    pub request_timeout_secs: Option<u64>,
    /// Start on the home view instead of the intro
    pub skip_intro: Option<bool>,
}

/// Everything EmailJS needs to accept a send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "terrydesigns", "studio-tui")
}

impl StudioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            _ => Self::default(),
        };

        Ok(config.with_env_from(|key| std::env::var(key).ok()))
    }

    /// Override fields from environment-style variables. Empty values are ignored.
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = var("EMAILJS_SERVICE_ID") {
            self.emailjs_service_id = Some(value);
        }
        if let Some(value) = var("EMAILJS_TEMPLATE_ID") {
            self.emailjs_template_id = Some(value);
        }
        if let Some(value) = var("EMAILJS_PUBLIC_KEY") {
            self.emailjs_public_key = Some(value);
        }
        if let Some(value) = var("GEMINI_API_KEY") {
            self.gemini_api_key = Some(value);
        }
        if let Some(value) = var("GEMINI_MODEL") {
            self.gemini_model = Some(value);
        }
        self
    }

    /// EmailJS credentials, when all three parts are present
    pub fn email_credentials(&self) -> Option<EmailCredentials> {
        Some(EmailCredentials {
            service_id: self.emailjs_service_id.clone()?,
            template_id: self.emailjs_template_id.clone()?,
            public_key: self.emailjs_public_key.clone()?,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        match self.request_timeout_secs {
            Some(secs) if secs > 0 => Duration::from_secs(secs),
            _ => DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn skip_intro(&self) -> bool {
        self.skip_intro.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = StudioConfig::default();
        assert!(config.email_credentials().is_none());
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(!config.skip_intro());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: StudioConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, StudioConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Unknown fields are ignored
        let json = r#"{"gemini_model": "gemini-2.5-pro", "theme": "dark"}"#;
        let parsed: StudioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.gemini_model, Some("gemini-2.5-pro".to_string()));
    }

    #[test]
    fn test_partial_serialization() {
        let config = StudioConfig {
            request_timeout_secs: Some(10),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: StudioConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.request_timeout(), Duration::from_secs(10));
        assert!(parsed.emailjs_service_id.is_none());
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = StudioConfig {
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_credentials_need_all_parts() {
        let mut config = StudioConfig {
            emailjs_service_id: Some("service_abc".to_string()),
            emailjs_template_id: Some("template_xyz".to_string()),
            ..Default::default()
        };
        assert!(config.email_credentials().is_none());

        config.emailjs_public_key = Some("pk_123".to_string());
        assert_eq!(
            config.email_credentials(),
            Some(EmailCredentials {
                service_id: "service_abc".to_string(),
                template_id: "template_xyz".to_string(),
                public_key: "pk_123".to_string(),
            })
        );
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = StudioConfig {
            gemini_api_key: Some("from-file".to_string()),
            gemini_model: Some("gemini-2.5-pro".to_string()),
            ..Default::default()
        }
        .with_env_from(env(&[
            ("GEMINI_API_KEY", "from-env"),
            ("EMAILJS_SERVICE_ID", "service_env"),
        ]));

        assert_eq!(config.gemini_api_key, Some("from-env".to_string()));
        assert_eq!(config.gemini_model, Some("gemini-2.5-pro".to_string()));
        assert_eq!(config.emailjs_service_id, Some("service_env".to_string()));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = StudioConfig {
            emailjs_public_key: Some("pk_file".to_string()),
            ..Default::default()
        }
        .with_env_from(env(&[("EMAILJS_PUBLIC_KEY", "  ")]));

        assert_eq!(config.emailjs_public_key, Some("pk_file".to_string()));
    }

    #[test]
    fn test_log_path_is_in_data_dir() {
        if let Some(path) = StudioConfig::log_path() {
            assert!(path.ends_with(LOG_FILE));
        }
    }
}
