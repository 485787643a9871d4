//! Brevo transactional email.

use crate::MailError;
use async_trait::async_trait;
use muse_content::FetchClient;
use serde::{Deserialize, Serialize};

/// Transactional send endpoint.
pub const DEFAULT_API_URL: &str = "https://api.brevo.com/v3/smtp/email";

/// Sender address when none is configured.
pub const DEFAULT_SENDER_EMAIL: &str = "noreply@muse.com";

/// Where contact form messages are delivered when no inbox is configured.
pub const DEFAULT_INBOX_EMAIL: &str = "toyourmuse@gmail.com";

/// A named mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mailbox {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Mailbox {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// Send request body, as the provider expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrevoEmail {
    pub sender: Mailbox,
    pub to: Vec<Mailbox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Mailbox>,
    pub subject: String,
    pub html_content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendResult {
    message_id: Option<String>,
}

/// Provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrevoConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Overrides the per-form sender name when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(default = "default_sender_email")]
    pub sender_email: String,
    #[serde(default = "default_inbox_email")]
    pub inbox_email: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_sender_email() -> String {
    DEFAULT_SENDER_EMAIL.to_string()
}

fn default_inbox_email() -> String {
    DEFAULT_INBOX_EMAIL.to_string()
}

impl Default for BrevoConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            sender_name: None,
            sender_email: default_sender_email(),
            inbox_email: default_inbox_email(),
        }
    }
}

impl BrevoConfig {
    /// Replace settings with values from the process environment, where set.
    ///
    /// `BREVO_SENDER_EMAIL` sets both the sender and the inbox.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(key) = env_value("BREVO_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(name) = env_value("BREVO_SENDER_NAME") {
            self.sender_name = Some(name);
        }
        if let Some(email) = env_value("BREVO_SENDER_EMAIL") {
            self.sender_email = email.clone();
            self.inbox_email = email;
        }
        self
    }

    /// The sender name, falling back to `default` when unset.
    pub fn sender_name_or(&self, default: &str) -> String {
        self.sender_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(default)
            .to_string()
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Something that can deliver an email and report the provider's message ID.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &BrevoEmail) -> Result<String, MailError>;
}

/// HTTP client for the Brevo API.
#[derive(Clone)]
pub struct BrevoClient {
    http: FetchClient,
    api_url: String,
}

impl BrevoClient {
    pub fn new(config: &BrevoConfig) -> Result<Self, MailError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(MailError::MissingApiKey)?;

        Ok(Self {
            http: FetchClient::new()
                .with_default_header("Accept", "application/json")
                .with_default_header("api-key", api_key),
            api_url: config.api_url.clone(),
        })
    }
}

#[async_trait]
impl MailTransport for BrevoClient {
    async fn send(&self, email: &BrevoEmail) -> Result<String, MailError> {
        let response = self
            .http
            .post(self.api_url.as_str())
            .json(email)?
            .send()
            .await?;

        if !response.is_success() {
            let message = response.text().unwrap_or_default();
            tracing::error!(status = response.status, %message, "Brevo API error");
            return Err(MailError::Provider {
                status: response.status,
                message,
            });
        }

        let result: SendResult = response
            .json()
            .map_err(|e| MailError::UnexpectedResponse(e.to_string()))?;
        let message_id = result.message_id.unwrap_or_default();
        tracing::debug!(%message_id, subject = %email.subject, "email sent");
        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_camel_case() {
        let email = BrevoEmail {
            sender: Mailbox::named("noreply@muse.com", "Muse Contact Form"),
            to: vec![Mailbox::new("ayu@example.com")],
            reply_to: Some(Mailbox::named("ayu@example.com", "Ayu Lestari")),
            subject: "Hi".to_string(),
            html_content: "<p>Hi</p>".to_string(),
        };
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["replyTo"]["name"], "Ayu Lestari");
        assert_eq!(json["htmlContent"], "<p>Hi</p>");
        assert!(json["to"][0].get("name").is_none());
    }

    #[test]
    fn test_reply_to_omitted_when_absent() {
        let email = BrevoEmail {
            sender: Mailbox::new("noreply@muse.com"),
            to: vec![Mailbox::new("ayu@example.com")],
            reply_to: None,
            subject: "Hi".to_string(),
            html_content: String::new(),
        };
        let json = serde_json::to_value(&email).unwrap();
        assert!(json.get("replyTo").is_none());
    }

    #[test]
    fn test_config_defaults() {
        let config: BrevoConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BrevoConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.sender_email, "noreply@muse.com");
        assert_eq!(config.inbox_email, "toyourmuse@gmail.com");
        assert_eq!(config.sender_name_or("Muse Newsletter"), "Muse Newsletter");
    }

    #[test]
    fn test_client_requires_api_key() {
        assert!(matches!(
            BrevoClient::new(&BrevoConfig::default()),
            Err(MailError::MissingApiKey)
        ));

        let config = BrevoConfig {
            api_key: Some(" xkeysib-123 ".to_string()),
            ..Default::default()
        };
        let client = BrevoClient::new(&config).unwrap();
        let req = client.http.post(client.api_url.as_str());
        assert_eq!(req.request().url(), DEFAULT_API_URL);
        assert_eq!(req.request().header_value("api-key"), Some("xkeysib-123"));
        assert_eq!(req.request().header_value("Accept"), Some("application/json"));
    }
}
