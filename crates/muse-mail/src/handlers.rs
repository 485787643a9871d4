//! Contact and newsletter form handlers.
//!
//! Each handler validates the form, builds the email, and hands it to a
//! [`MailTransport`]. The result is an HTTP-style status and JSON body, so the
//! same handlers can back a web route or a command-line front end.

use crate::brevo::{BrevoConfig, BrevoEmail, MailTransport, Mailbox};
use crate::templates::{contact_html, newsletter_html};
use crate::validation::{ContactRequest, NewsletterRequest};
use crate::MailError;
use serde::Serialize;
use serde_json::{json, Value};

const CONTACT_SENDER_NAME: &str = "Muse Contact Form";
const NEWSLETTER_SENDER_NAME: &str = "Muse Newsletter";
const INBOX_NAME: &str = "Muse Team";
const NEWSLETTER_SUBJECT: &str = "Welcome to Muse Newsletter!";

/// Status code and JSON body of a handled form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(message: &str, message_id: String) -> Self {
        Self {
            status: 200,
            body: json!({
                "success": true,
                "message": message,
                "messageId": message_id,
            }),
        }
    }

    fn error(status: u16, error: &str) -> Self {
        Self {
            status,
            body: json!({ "error": error }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// The `error` field of a failed response.
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

/// Email forwarding a contact form submission to the inbox.
pub fn contact_email(req: &ContactRequest, config: &BrevoConfig) -> BrevoEmail {
    let full_name = req.full_name();
    BrevoEmail {
        sender: Mailbox::named(
            config.sender_email.clone(),
            config.sender_name_or(CONTACT_SENDER_NAME),
        ),
        to: vec![Mailbox::named(config.inbox_email.clone(), INBOX_NAME)],
        reply_to: Some(Mailbox::named(req.email.clone(), full_name.clone())),
        subject: format!("New Contact Form Message from {}", full_name),
        html_content: contact_html(&full_name, &req.email, &req.message),
    }
}

/// Welcome email for a new subscriber.
pub fn newsletter_email(req: &NewsletterRequest, config: &BrevoConfig) -> BrevoEmail {
    BrevoEmail {
        sender: Mailbox::named(
            config.sender_email.clone(),
            config.sender_name_or(NEWSLETTER_SENDER_NAME),
        ),
        to: vec![Mailbox::new(req.email.clone())],
        reply_to: None,
        subject: NEWSLETTER_SUBJECT.to_string(),
        html_content: newsletter_html(),
    }
}

async fn deliver(
    transport: &dyn MailTransport,
    email: BrevoEmail,
    success: &str,
    failure: &str,
) -> ApiResponse {
    match transport.send(&email).await {
        Ok(message_id) => ApiResponse::ok(success, message_id),
        Err(MailError::Provider { status, message }) => {
            tracing::error!(status, %message, "provider rejected email");
            ApiResponse::error(500, failure)
        }
        Err(e) => {
            tracing::error!(error = %e, "email delivery failed");
            ApiResponse::error(500, "Internal server error")
        }
    }
}

/// Handle a contact form submission.
pub async fn handle_contact(
    transport: &dyn MailTransport,
    config: &BrevoConfig,
    req: &ContactRequest,
) -> ApiResponse {
    if let Err(e) = req.validate() {
        return ApiResponse::error(400, &e.to_string());
    }
    let email = contact_email(req, config);
    deliver(transport, email, "Message sent successfully!", "Failed to send message").await
}

/// Handle a newsletter sign-up.
pub async fn handle_newsletter(
    transport: &dyn MailTransport,
    config: &BrevoConfig,
    req: &NewsletterRequest,
) -> ApiResponse {
    if let Err(e) = req.validate() {
        return ApiResponse::error(400, &e.to_string());
    }
    let email = newsletter_email(req, config);
    deliver(
        transport,
        email,
        "Newsletter subscription successful!",
        "Failed to send email",
    )
    .await
}
