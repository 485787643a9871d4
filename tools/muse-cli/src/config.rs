//! CLI configuration.

use anyhow::{Context, Result};
use muse_catalog::prelude::ContactLink;
use muse_content::DatoCmsConfig;
use muse_mail::BrevoConfig;
use serde::{Deserialize, Serialize};

/// Names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["muse.toml", ".muse.toml", "muse.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MuseConfig {
    /// Content source settings.
    #[serde(default)]
    pub cms: DatoCmsConfig,

    /// Outbound email settings.
    #[serde(default)]
    pub mail: BrevoConfig,

    /// Deep link used when a shopper falls outside the fit bands.
    #[serde(default)]
    pub contact: ContactLink,
}

impl MuseConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Apply credentials and sender overrides from the process environment.
    pub fn with_env_overrides(mut self) -> Self {
        self.cms = self.cms.with_env_overrides();
        self.mail = self.mail.with_env_overrides();
        self
    }

    /// The same config with secrets masked, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.cms.api_token = config.cms.api_token.as_deref().map(mask);
        config.mail.api_key = config.mail.api_key.as_deref().map(mask);
        config
    }
}

fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    format!("{}…", visible)
}

/// Generate a default muse.toml config file.
pub fn generate_default_config() -> String {
    r#"# Muse storefront configuration

[cms]
endpoint = "https://graphql.datocms.com/"
environment = "main"
# Read-only token; DATOCMS_API_TOKEN overrides this.
# api_token = ""

[mail]
api_url = "https://api.brevo.com/v3/smtp/email"
sender_email = "noreply@muse.com"
inbox_email = "toyourmuse@gmail.com"
# BREVO_API_KEY overrides this.
# api_key = ""
# sender_name = "Muse"

[contact]
host = "wa.me"
recipient = "6289602446618"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = MuseConfig::parse("muse.toml", &generate_default_config()).unwrap();
        assert_eq!(config.cms.environment, "main");
        assert!(config.cms.api_token.is_none());
        assert_eq!(config.mail.inbox_email, "toyourmuse@gmail.com");
        assert_eq!(config.contact, ContactLink::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = MuseConfig::parse(
            "muse.toml",
            "[cms]\napi_token = \"abc123\"\n\n[contact]\nhost = \"wa.me\"\nrecipient = \"62811\"\n",
        )
        .unwrap();
        assert_eq!(config.cms.token(), Some("abc123"));
        assert_eq!(config.cms.endpoint, "https://graphql.datocms.com/");
        assert_eq!(config.contact.recipient, "62811");
        assert_eq!(config.mail.sender_email, "noreply@muse.com");
    }

    #[test]
    fn test_json_config() {
        let config =
            MuseConfig::parse("muse.json", r#"{"mail": {"api_key": "xkeysib"}}"#).unwrap();
        assert_eq!(config.mail.api_key.as_deref(), Some("xkeysib"));
    }

    #[test]
    fn test_redacted_masks_secrets() {
        let mut config = MuseConfig::default();
        config.cms.api_token = Some("abcdef123456".to_string());
        let shown = config.redacted();
        assert_eq!(shown.cms.api_token.as_deref(), Some("abcd…"));
        assert!(shown.mail.api_key.is_none());
    }
}
