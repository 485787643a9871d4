//! Catalogue listing.

use anyhow::Result;
use muse_catalog::prelude::{format_price, Facets, FilterSpec, Product, SizeTag};
use muse_content::CatalogueView;

use super::CatalogueArgs;
use crate::context::Context;
use crate::output::truncate;

const WIDTHS: [usize; 6] = [28, 16, 6, 6, 10, 24];

/// Run the catalogue command.
pub async fn run(args: CatalogueArgs, ctx: &Context) -> Result<()> {
    let cms = ctx.cms()?;

    let spinner = ctx.output.spinner("Loading catalogue...");
    let view = CatalogueView::load(&cms).await;
    spinner.finish_and_clear();

    if view.is_empty() {
        ctx.output.warn("No products available");
    }

    if args.facets {
        show_facets(view.facets(), ctx);
        return Ok(());
    }

    if args.sort_price.is_some() && args.sort_popularity.is_some() {
        ctx.output
            .warn("Both sorts given; sorting by price and ignoring popularity");
    }

    let spec = build_spec(&args, view.default_spec());
    let products = view.query(&spec);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(view.title());
    ctx.output.table_row(
        &["Name", "Price", "Rating", "Sold", "Size", "Colors"],
        &WIDTHS,
    );
    for product in &products {
        print_row(product, ctx);
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {} of {} products",
        products.len(),
        view.products().len()
    ));

    Ok(())
}

/// Overlay the command-line filters on the page's starting spec.
pub(crate) fn build_spec(args: &CatalogueArgs, base: &FilterSpec) -> FilterSpec {
    let mut spec = base.clone();

    if let Some(text) = &args.search {
        spec = spec.with_search(text.clone());
    }
    if !args.colors.is_empty() {
        spec = spec.with_colors(args.colors.iter().cloned());
    }
    if !args.sizes.is_empty() {
        spec = spec.with_sizes(args.sizes.iter().map(|s| SizeTag::from_str(s)));
    }
    if args.min.is_some() {
        spec = spec.with_price_min(args.min);
    }
    if args.max.is_some() {
        spec = spec.with_price_max(args.max);
    }

    // Price is applied last so it wins when both are given.
    if args.sort_popularity.is_some() {
        spec = spec.with_popularity_sort(args.sort_popularity);
    }
    if args.sort_price.is_some() {
        spec = spec.with_price_sort(args.sort_price);
    }

    spec
}

fn print_row(product: &Product, ctx: &Context) {
    let colors: Vec<&str> = product.colors.iter().map(|c| c.name.as_str()).collect();
    ctx.output.table_row(
        &[
            truncate(&product.name, WIDTHS[0]).as_str(),
            format_price(product.price).as_str(),
            format!("{:.1}", product.rating).as_str(),
            product.sold_count.to_string().as_str(),
            product.size.display_name(),
            colors.join(", ").as_str(),
        ],
        &WIDTHS,
    );
}

fn show_facets(facets: &Facets, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(facets);
        return;
    }

    ctx.output.header("Colors");
    for color in &facets.colors {
        ctx.output.list_item(&format!("{} ({})", color.name, color.hex));
    }

    ctx.output.header("Sizes");
    for size in &facets.sizes {
        ctx.output.list_item(size.display_name());
    }

    ctx.output.header("Price range");
    match facets.price_range {
        Some(range) => ctx.output.kv(
            "range",
            &format!("{} - {}", format_price(range.min), format_price(range.max)),
        ),
        None => ctx.output.kv("range", "n/a"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muse_catalog::prelude::{derive_facets, query, SortDirection};

    fn products() -> Vec<Product> {
        let mut kebaya = Product::new("1", "Kebaya Kartini", "kebaya-kartini", 350_000);
        kebaya.add_color("Maroon", "#800000");
        kebaya.sold_count = 5;
        let mut outer = Product::new("2", "Outer Batik", "outer-batik", 150_000);
        outer.add_color("Sage", "#9caf88");
        outer.size = SizeTag::M;
        outer.sold_count = 50;
        let mut dress = Product::new("3", "Dress Melati", "dress-melati", 275_000);
        dress.add_color("Maroon", "#800000");
        dress.sold_count = 20;
        vec![kebaya, outer, dress]
    }

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_no_flags_keeps_default_spec() {
        let base = FilterSpec::seeded(&derive_facets(&products()));
        assert_eq!(build_spec(&CatalogueArgs::default(), &base), base);
    }

    #[test]
    fn test_flags_applied() {
        let items = products();
        let base = FilterSpec::seeded(&derive_facets(&items));
        let args = CatalogueArgs {
            colors: vec!["Maroon".to_string()],
            max: Some(300_000),
            ..Default::default()
        };
        let spec = build_spec(&args, &base);
        assert_eq!(names(&query(&items, &spec)), vec!["Dress Melati"]);
    }

    #[test]
    fn test_size_flag_parses_tags() {
        let items = products();
        let args = CatalogueArgs {
            sizes: vec!["m".to_string()],
            ..Default::default()
        };
        let spec = build_spec(&args, &FilterSpec::default());
        assert_eq!(names(&query(&items, &spec)), vec!["Outer Batik"]);
    }

    #[test]
    fn test_price_sort_wins() {
        let items = products();
        let args = CatalogueArgs {
            sort_price: Some(SortDirection::Ascending),
            sort_popularity: Some(SortDirection::Descending),
            ..Default::default()
        };
        let spec = build_spec(&args, &FilterSpec::default());
        assert!(spec.popularity_sort.is_none());
        assert_eq!(
            names(&query(&items, &spec)),
            vec!["Outer Batik", "Dress Melati", "Kebaya Kartini"]
        );
    }

    #[test]
    fn test_popularity_sort() {
        let items = products();
        let args = CatalogueArgs {
            sort_popularity: Some(SortDirection::Descending),
            ..Default::default()
        };
        let spec = build_spec(&args, &FilterSpec::default());
        assert_eq!(
            names(&query(&items, &spec)),
            vec!["Outer Batik", "Dress Melati", "Kebaya Kartini"]
        );
    }
}
