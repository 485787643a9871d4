//! Contact form and newsletter email for the Muse storefront.
//!
//! Form submissions are validated, rendered into HTML emails, and delivered
//! through a [`MailTransport`]; [`BrevoClient`] is the production transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use muse_mail::{handle_newsletter, BrevoClient, BrevoConfig, NewsletterRequest};
//!
//! let config = BrevoConfig::default().with_env_overrides();
//! let brevo = BrevoClient::new(&config)?;
//! let resp = handle_newsletter(&brevo, &config, &NewsletterRequest::new("ayu@example.com")).await;
//! assert_eq!(resp.status, 200);
//! ```

mod brevo;
mod error;
mod handlers;
mod templates;
mod validation;

pub use brevo::{
    BrevoClient, BrevoConfig, BrevoEmail, MailTransport, Mailbox, DEFAULT_API_URL,
    DEFAULT_INBOX_EMAIL, DEFAULT_SENDER_EMAIL,
};
pub use error::MailError;
pub use handlers::{contact_email, handle_contact, handle_newsletter, newsletter_email, ApiResponse};
pub use templates::escape_html;
pub use validation::{validate_email, ContactRequest, NewsletterRequest};
