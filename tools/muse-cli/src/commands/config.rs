//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use muse_mail::validate_email;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, MuseConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = ctx.config.redacted();

    if ctx.output.is_json() {
        ctx.output.json(&config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[cms]");
    ctx.output.kv("endpoint", &config.cms.endpoint);
    ctx.output.kv("environment", &config.cms.environment);
    ctx.output.kv(
        "api_token",
        config.cms.api_token.as_deref().unwrap_or("(not set)"),
    );

    ctx.output.info("");
    ctx.output.info("[mail]");
    ctx.output.kv("api_url", &config.mail.api_url);
    ctx.output.kv("sender_email", &config.mail.sender_email);
    ctx.output.kv("inbox_email", &config.mail.inbox_email);
    if let Some(name) = &config.mail.sender_name {
        ctx.output.kv("sender_name", name);
    }
    ctx.output.kv(
        "api_key",
        config.mail.api_key.as_deref().unwrap_or("(not set)"),
    );

    ctx.output.info("");
    ctx.output.info("[contact]");
    ctx.output.kv("host", &config.contact.host);
    ctx.output.kv("recipient", &config.contact.recipient);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("muse.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

/// Problems found in a config, split by severity.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub(crate) fn check_config(config: &MuseConfig) -> Findings {
    let mut findings = Findings::default();

    if !config.cms.endpoint.starts_with("https://") {
        findings
            .errors
            .push("cms.endpoint must be an https:// URL".to_string());
    }
    if config.cms.environment.trim().is_empty() {
        findings
            .errors
            .push("cms.environment must not be empty".to_string());
    }
    if config.cms.token().is_none() {
        findings
            .warnings
            .push("cms.api_token is not set; catalogue and product commands will fail".to_string());
    }

    if !config.mail.api_url.starts_with("https://") {
        findings
            .errors
            .push("mail.api_url must be an https:// URL".to_string());
    }
    for (key, value) in [
        ("mail.sender_email", &config.mail.sender_email),
        ("mail.inbox_email", &config.mail.inbox_email),
    ] {
        if validate_email(value).is_err() {
            findings
                .errors
                .push(format!("{} '{}' is not a valid email address", key, value));
        }
    }
    if config.mail.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
        findings
            .warnings
            .push("mail.api_key is not set; contact and subscribe will fail".to_string());
    }

    if config.contact.host.trim().is_empty() || config.contact.host.contains("://") {
        findings
            .errors
            .push("contact.host must be a bare host name, e.g. wa.me".to_string());
    }
    if config.contact.recipient.is_empty()
        || !config.contact.recipient.chars().all(|c| c.is_ascii_digit())
    {
        findings.errors.push(
            "contact.recipient must be a phone number in international format, digits only"
                .to_string(),
        );
    }

    findings
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let findings = check_config(&ctx.config);

    if findings.errors.is_empty() && findings.warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &findings.errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &findings.warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !findings.errors.is_empty() {
        bail!("Configuration has {} error(s)", findings.errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
