//! Fit check.

use anyhow::{bail, Result};
use console::style;
use muse_content::{FitOutcome, FitPage};

use super::FitArgs;
use crate::context::Context;

/// Run the fit command.
pub async fn run(args: FitArgs, ctx: &Context) -> Result<()> {
    let page = match ctx.cms() {
        Ok(cms) => {
            let spinner = ctx.output.spinner("Loading fit guide...");
            let page = FitPage::load(&cms, args.product.as_deref(), &ctx.config.contact).await;
            spinner.finish_and_clear();
            page
        }
        Err(e) => {
            ctx.output
                .warn(&format!("{:#}; using the built-in fit guide", e));
            FitPage::new(&ctx.config.contact)
        }
    };

    if let Some(error) = &page.error {
        ctx.output.warn(error);
    }

    let outcome = page.check(&args.height, &args.weight);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "page": page,
            "result": outcome,
        }));
        return match outcome {
            FitOutcome::Invalid { reason } => bail!(reason),
            _ => Ok(()),
        };
    }

    ctx.output.header(&page.title);

    if args.models {
        for model in &page.models {
            ctx.output.list_item(&format!(
                "{} / {}  {}  {}",
                model.height, model.weight, model.desc, model.image
            ));
        }
        ctx.output.info("");
    }

    match outcome {
        FitOutcome::Invalid { reason } => bail!("Invalid measurements: {}", reason),
        FitOutcome::Fits => {
            ctx.output.success(&format!(
                "{} cm / {} kg fits our All Size garments",
                args.height.trim(),
                args.weight.trim()
            ));
        }
        FitOutcome::NoMatch { message, url } => {
            ctx.output
                .warn("These measurements are outside our All Size range");
            ctx.output.info("Chat with us for a personal recommendation:");
            println!("\n{}\n", style(&message).dim());
            println!("  {}", style(&url).cyan().underlined());
        }
    }

    Ok(())
}
