//! Form validation.

use crate::MailError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Check an address has the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), MailError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(MailError::Validation("Invalid email format".to_string()))
    }
}

/// A contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), MailError> {
        let fields = [&self.first_name, &self.last_name, &self.email, &self.message];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(MailError::Validation("All fields are required".to_string()));
        }
        validate_email(&self.email)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A newsletter sign-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterRequest {
    #[serde(default)]
    pub email: String,
}

impl NewsletterRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), MailError> {
        if self.email.is_empty() {
            return Err(MailError::Validation("Email is required".to_string()));
        }
        validate_email(&self.email)
    }
}
