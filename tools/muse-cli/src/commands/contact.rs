//! Contact form and newsletter sign-up.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input};
use muse_mail::{handle_contact, handle_newsletter, ApiResponse, ContactRequest, NewsletterRequest};

use super::{ContactArgs, SubscribeArgs};
use crate::context::Context;

/// Run the contact command.
pub async fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let interactive = !ctx.output.is_json();

    let req = ContactRequest {
        first_name: field(args.first_name, "First name", interactive)?,
        last_name: field(args.last_name, "Last name", interactive)?,
        email: field(args.email, "Email", interactive)?,
        message: field(args.message, "Message", interactive)?,
    };

    if let Err(e) = req.validate() {
        bail!(e);
    }

    if interactive && !args.yes {
        ctx.output.kv("from", &format!("{} <{}>", req.full_name(), req.email));
        ctx.output.kv("inbox", &ctx.config.mail.inbox_email);
        let confirmed = Confirm::new()
            .with_prompt("Send this message?")
            .default(true)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    let mailer = ctx.mailer()?;
    let spinner = ctx.output.spinner("Sending...");
    let resp = handle_contact(&mailer, &ctx.config.mail, &req).await;
    spinner.finish_and_clear();

    report(resp, ctx)
}

/// Run the subscribe command.
pub async fn subscribe(args: SubscribeArgs, ctx: &Context) -> Result<()> {
    let req = NewsletterRequest::new(args.email.trim());
    if let Err(e) = req.validate() {
        bail!(e);
    }

    let mailer = ctx.mailer()?;
    let spinner = ctx.output.spinner("Subscribing...");
    let resp = handle_newsletter(&mailer, &ctx.config.mail, &req).await;
    spinner.finish_and_clear();

    report(resp, ctx)
}

fn field(value: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(value) => Ok(value.trim().to_string()),
        None if interactive => {
            let value: String = Input::new().with_prompt(prompt).interact_text()?;
            Ok(value.trim().to_string())
        }
        None => Ok(String::new()),
    }
}

fn report(resp: ApiResponse, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&resp.body);
    }

    if !resp.is_success() {
        bail!(
            "{} (status {})",
            resp.error_message().unwrap_or("Request failed"),
            resp.status
        );
    }

    let message = resp.body["message"].as_str().unwrap_or("Done");
    ctx.output.success(message);
    if let Some(id) = resp.body["messageId"].as_str().filter(|id| !id.is_empty()) {
        ctx.output.kv("message id", id);
    }

    Ok(())
}
