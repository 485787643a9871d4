//! Contact message for shoppers outside the fit bands.

use serde::{Deserialize, Serialize};

/// Written in place of a blank measurement or product name.
pub const MISSING_MEASUREMENT: &str = "[tidak diisi]";

/// Messaging host used when none is configured.
pub const DEFAULT_CONTACT_HOST: &str = "wa.me";

/// Recipient used when the content source does not supply one.
pub const DEFAULT_CONTACT_RECIPIENT: &str = "6289602446618";

/// Editorial text wrapped around the generated measurement lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactTemplate {
    /// Text before the measurement lines.
    pub prefix: String,
    /// Text after the measurement lines.
    pub suffix: String,
}

impl ContactTemplate {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

/// Build the plain-text contact message.
///
/// `product_name` falls back to `default_product_name` when absent or blank.
/// Blank values, including a blank fallback name, are written as
/// [`MISSING_MEASUREMENT`], so no line is ever left empty.
pub fn build_contact_message(
    product_name: Option<&str>,
    default_product_name: &str,
    height: &str,
    weight: &str,
    template: &ContactTemplate,
) -> String {
    let product_name = product_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(default_product_name);

    format!(
        "{}\n\n- Nama Produk: {}\n- Tinggi badan: {} cm\n- Berat badan: {} kg\n\n{}",
        template.prefix,
        or_missing(product_name),
        or_missing(height),
        or_missing(weight),
        template.suffix
    )
}

fn or_missing(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        MISSING_MEASUREMENT
    } else {
        value
    }
}

/// Deep link into the external messaging app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLink {
    pub host: String,
    pub recipient: String,
}

impl Default for ContactLink {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACT_HOST, DEFAULT_CONTACT_RECIPIENT)
    }
}

impl ContactLink {
    pub fn new(host: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            recipient: recipient.into(),
        }
    }

    /// `https://<host>/<recipient>?text=<percent-encoded message>`
    pub fn url(&self, message: &str) -> String {
        format!(
            "https://{}/{}?text={}",
            self.host.trim_end_matches('/'),
            self.recipient,
            urlencoding::encode(message)
        )
    }
}
