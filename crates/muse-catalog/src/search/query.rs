//! Catalogue query engine.

use crate::catalog::Product;
use crate::search::FilterSpec;
use tracing::debug;

/// Derive the visible product list from the full set and a filter spec.
///
/// Filtering keeps products that pass every predicate of `spec`. The
/// survivors are then ordered by the spec's sort key with a stable sort, so
/// equal keys keep their original relative order. With no sort key the
/// filtered list is returned as-is.
///
/// Pure: identical inputs always produce identical output.
pub fn query<'a>(products: &'a [Product], spec: &FilterSpec) -> Vec<&'a Product> {
    let needle = spec.search_text.to_lowercase();

    let mut visible: Vec<&Product> = products
        .iter()
        .filter(|p| {
            spec.matches_name(&needle, p)
                && spec.matches_color(p)
                && spec.matches_size(p)
                && spec.matches_price(p)
        })
        .collect();

    let sort_key = spec.sort_key();
    if let Some(key) = sort_key {
        visible.sort_by(|a, b| key.compare(a, b));
    }

    debug!(
        total = products.len(),
        visible = visible.len(),
        sort = ?sort_key,
        "catalogue query"
    );

    visible
}

/// Owned variant of [`query`].
pub fn query_owned(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    query(products, spec).into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SizeTag;
    use crate::search::SortDirection;

    fn product(id: &str, name: &str, price: u64, sold: u64) -> Product {
        let mut p = Product::new(id, name, id, price);
        p.sold_count = sold;
        p
    }

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert!(query(&[], &FilterSpec::new()).is_empty());

        let products = vec![product("a", "A", 10, 0), product("b", "B", 5, 0)];
        let all = query(&products, &FilterSpec::new());
        assert_eq!(names(&all), vec!["A", "B"]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let products = vec![
            product("a", "First", 100, 0),
            product("b", "Cheap", 50, 0),
            product("c", "Second", 100, 0),
        ];
        let spec = FilterSpec::new().with_price_sort(Some(SortDirection::Descending));
        let sorted = query(&products, &spec);
        assert_eq!(names(&sorted), vec!["First", "Second", "Cheap"]);
    }

    #[test]
    fn test_popularity_sort() {
        let products = vec![
            product("a", "A", 100, 5),
            product("b", "B", 50, 20),
            product("c", "C", 200, 1),
        ];
        let spec = FilterSpec::new().with_popularity_sort(Some(SortDirection::Ascending));
        assert_eq!(names(&query(&products, &spec)), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_filters_are_anded() {
        let mut a = product("a", "Batik Shirt", 150, 0);
        a.add_color("Indigo", "#4B0082");
        a.size = SizeTag::L;
        let mut b = product("b", "Batik Skirt", 150, 0);
        b.add_color("Indigo", "#4B0082");
        b.size = SizeTag::M;
        let c = product("c", "Batik Scarf", 150, 0);

        let spec = FilterSpec::new()
            .with_search("batik")
            .toggle_color("Indigo")
            .toggle_size(SizeTag::L);
        assert_eq!(names(&query(&[a, b, c], &spec)), vec!["Batik Shirt"]);
    }

    #[test]
    fn test_product_without_colors_only_visible_unfiltered() {
        let bare = product("a", "Plain Tee", 80, 0);
        let products = vec![bare];

        assert_eq!(query(&products, &FilterSpec::new()).len(), 1);
        assert!(query(&products, &FilterSpec::new().toggle_color("Black")).is_empty());
    }

    #[test]
    fn test_query_owned_matches_borrowed() {
        let products = vec![product("a", "A", 30, 1), product("b", "B", 10, 2)];
        let spec = FilterSpec::new().with_price_sort(Some(SortDirection::Ascending));
        let owned = query_owned(&products, &spec);
        assert_eq!(owned[0].name, "B");
        assert_eq!(owned.len(), 2);
    }
}
