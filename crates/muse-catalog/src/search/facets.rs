//! Facets derived from the full product set.

use crate::catalog::{Product, SizeTag};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A selectable color, deduplicated by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorFacet {
    pub name: String,
    pub hex: String,
}

/// Observed inclusive price range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// Check if a price falls inside the range.
    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Filter values available for a product set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Facets {
    /// Distinct colors in first-seen order.
    pub colors: Vec<ColorFacet>,
    /// Distinct size tags in first-seen order.
    pub sizes: Vec<SizeTag>,
    /// `None` when there are no products.
    pub price_range: Option<PriceRange>,
}

impl Facets {
    /// Check if there is nothing to filter on.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty() && self.price_range.is_none()
    }

    /// Look up the swatch hex for a color name.
    pub fn hex_for(&self, name: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.hex.as_str())
    }
}

/// Compute the facets of a product set.
///
/// Run once per freshly loaded product set, not per filter change. When a
/// color name shows up with different hex values, the first one seen wins.
pub fn derive_facets(products: &[Product]) -> Facets {
    let mut facets = Facets::default();
    let mut seen_colors: HashSet<&str> = HashSet::new();
    let mut seen_sizes: HashSet<&SizeTag> = HashSet::new();

    for product in products {
        for color in &product.colors {
            if seen_colors.insert(color.name.as_str()) {
                facets.colors.push(ColorFacet {
                    name: color.name.clone(),
                    hex: color.hex.clone(),
                });
            }
        }

        if seen_sizes.insert(&product.size) {
            facets.sizes.push(product.size.clone());
        }

        facets.price_range = Some(match facets.price_range {
            Some(range) => PriceRange {
                min: range.min.min(product.price),
                max: range.max.max(product.price),
            },
            None => PriceRange {
                min: product.price,
                max: product.price,
            },
        });
    }

    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_products() {
        let facets = derive_facets(&[]);
        assert!(facets.is_empty());
        assert_eq!(facets.price_range, None);
    }

    #[test]
    fn test_first_seen_hex_wins() {
        let mut a = Product::new("a", "A", "a", 100);
        a.add_color("Red", "#FF0000");
        let mut b = Product::new("b", "B", "b", 200);
        b.add_color("Red", "#FF0001");
        b.add_color("Sand", "#C2B280");

        let facets = derive_facets(&[a, b]);
        assert_eq!(facets.colors.len(), 2);
        assert_eq!(facets.hex_for("Red"), Some("#FF0000"));
        assert_eq!(facets.colors[1].name, "Sand");
    }

    #[test]
    fn test_sizes_and_price_range() {
        let mut a = Product::new("a", "A", "a", 350);
        a.size = SizeTag::M;
        let b = Product::new("b", "B", "b", 120);
        let mut c = Product::new("c", "C", "c", 900);
        c.size = SizeTag::M;

        let facets = derive_facets(&[a, b, c]);
        assert_eq!(facets.sizes, vec![SizeTag::M, SizeTag::AllSize]);
        assert_eq!(facets.price_range, Some(PriceRange { min: 120, max: 900 }));
        assert!(facets.price_range.unwrap().contains(900));
    }
}
