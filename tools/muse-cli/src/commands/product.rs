//! Product detail.

use anyhow::{bail, Context as _, Result};
use muse_catalog::prelude::{format_price, Review, PLACEHOLDER_IMAGE};
use muse_content::ContentSource;
use serde_json::Value;

use super::ProductArgs;
use crate::context::Context;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let cms = ctx.cms()?;

    let spinner = ctx.output.spinner("Loading product...");
    let product = cms.fetch_product(&args.slug).await;
    let reviews = if args.no_reviews {
        Ok(Vec::new())
    } else {
        cms.fetch_reviews().await
    };
    spinner.finish_and_clear();

    let product = match product.context("Failed to load product")? {
        Some(product) => product,
        None => bail!("Product not found: {}", args.slug),
    };

    let reviews: Vec<Review> = reviews.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to fetch reviews");
        Vec::new()
    });

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "reviews": reviews,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("price", &format_price(product.price));
    ctx.output.kv("rating", &format!("{:.1} / 5", product.rating));
    ctx.output.kv("size", product.size.display_name());
    ctx.output.kv("sold", &product.sold_count.to_string());
    ctx.output.kv("image", product.thumbnail_or(PLACEHOLDER_IMAGE));
    if !product.colors.is_empty() {
        let colors: Vec<String> = product
            .colors
            .iter()
            .map(|c| format!("{} ({})", c.name, c.hex))
            .collect();
        ctx.output.kv("colors", &colors.join(", "));
    }

    if let Some(description) = &product.description {
        let text = plain_text(description);
        if !text.is_empty() {
            ctx.output.header("Description");
            println!("{}", text);
        }
    }

    if !reviews.is_empty() {
        ctx.output.header("Reviews");
        for review in &reviews {
            ctx.output.review(review);
        }
    }

    Ok(())
}

/// Render a structured-text document as plain text, one block per line.
pub(crate) fn plain_text(document: &Value) -> String {
    let root = document.get("document").unwrap_or(document);
    let mut lines = Vec::new();
    render_blocks(root, &mut lines, "");
    lines.join("\n")
}

fn render_blocks(node: &Value, lines: &mut Vec<String>, indent: &str) {
    let children = node
        .get("children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    match node.get("type").and_then(Value::as_str) {
        Some("paragraph") | Some("heading") => {
            lines.push(format!("{}{}", indent, inline_text(node)));
        }
        Some("blockquote") => {
            let mut quoted = Vec::new();
            for child in children {
                render_blocks(child, &mut quoted, "");
            }
            lines.extend(quoted.into_iter().map(|l| format!("{}> {}", indent, l)));
        }
        Some("list") => {
            let numbered = node.get("style").and_then(Value::as_str) == Some("numbered");
            for (i, item) in children.iter().enumerate() {
                let marker = if numbered {
                    format!("{}. ", i + 1)
                } else {
                    "• ".to_string()
                };
                let mut item_lines = Vec::new();
                render_blocks(item, &mut item_lines, "");
                for (j, line) in item_lines.into_iter().enumerate() {
                    let prefix = if j == 0 { marker.clone() } else { "  ".to_string() };
                    lines.push(format!("{}{}{}", indent, prefix, line));
                }
            }
        }
        _ => {
            for child in children {
                render_blocks(child, lines, indent);
            }
        }
    }
}

fn inline_text(node: &Value) -> String {
    if let Some(value) = node.get("value").and_then(Value::as_str) {
        return value.to_string();
    }
    node.get("children")
        .and_then(Value::as_array)
        .map(|children| children.iter().map(inline_text).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn span(text: &str) -> Value {
        json!({ "type": "span", "value": text })
    }

    #[test]
    fn test_plain_text_paragraphs_and_lists() {
        let doc = json!({
            "schema": "dast",
            "document": {
                "type": "root",
                "children": [
                    { "type": "heading", "level": 1, "children": [span("Kebaya Kartini")] },
                    { "type": "paragraph", "children": [
                        span("Bahan "),
                        { "type": "link", "url": "https://muse.id", "children": [span("katun")] },
                        span(" premium.")
                    ]},
                    { "type": "list", "style": "numbered", "children": [
                        { "type": "listItem", "children": [{ "type": "paragraph", "children": [span("Cuci tangan")] }] },
                        { "type": "listItem", "children": [{ "type": "paragraph", "children": [span("Jangan diputih")] }] }
                    ]},
                    { "type": "blockquote", "children": [{ "type": "paragraph", "children": [span("Nyaman!")] }] }
                ]
            }
        });

        assert_eq!(
            plain_text(&doc),
            "Kebaya Kartini\nBahan katun premium.\n1. Cuci tangan\n2. Jangan diputih\n> Nyaman!"
        );
    }

    #[test]
    fn test_plain_text_bulleted_and_empty() {
        let doc = json!({ "type": "root", "children": [
            { "type": "list", "style": "bulleted", "children": [
                { "type": "listItem", "children": [{ "type": "paragraph", "children": [span("S")] }] }
            ]}
        ]});
        assert_eq!(plain_text(&doc), "• S");
        assert_eq!(plain_text(&json!({})), "");
    }
}
