//! Catalogue filter spec.

use crate::catalog::{Product, SizeTag};
use crate::error::CatalogError;
use crate::search::Facets;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Direction of a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    /// Low to high.
    Ascending,
    /// High to low.
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "low-to-high",
            SortDirection::Descending => "high-to-low",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Low to High",
            SortDirection::Descending => "High to Low",
        }
    }

    /// Apply this direction to an ascending comparison.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "low-to-high" => Ok(SortDirection::Ascending),
            "desc" | "descending" | "high-to-low" => Ok(SortDirection::Descending),
            other => Err(CatalogError::UnknownSort(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single sort key the engine applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price(SortDirection),
    Popularity(SortDirection),
}

impl SortKey {
    /// Compare two products under this key.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Price(dir) => dir.apply(a.price.cmp(&b.price)),
            SortKey::Popularity(dir) => dir.apply(a.sold_count.cmp(&b.sold_count)),
        }
    }
}

/// Active search, filter, and sort parameters for the catalogue view.
///
/// A spec is an immutable value: every transition consumes it and returns
/// the next spec, so the caller holds exactly one current value and the
/// engine never sees a half-applied change.
///
/// Empty color or size selections mean "no restriction". Price bounds are
/// inclusive at both ends; an inverted range (`price_min > price_max`)
/// simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against the product name.
    pub search_text: String,
    /// Selected color names.
    pub selected_colors: BTreeSet<String>,
    /// Selected size tags.
    pub selected_sizes: BTreeSet<SizeTag>,
    /// Inclusive lower price bound.
    pub price_min: u64,
    /// Inclusive upper price bound.
    pub price_max: u64,
    /// Price ordering; takes precedence over `popularity_sort` if both are set.
    pub price_sort: Option<SortDirection>,
    /// Units-sold ordering.
    pub popularity_sort: Option<SortDirection>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_colors: BTreeSet::new(),
            selected_sizes: BTreeSet::new(),
            price_min: 0,
            price_max: u64::MAX,
            price_sort: None,
            popularity_sort: None,
        }
    }
}

impl FilterSpec {
    /// Create a spec that lets every product through in its original order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the default spec for a freshly loaded product set, with price
    /// bounds spanning the observed range.
    pub fn seeded(facets: &Facets) -> Self {
        match facets.price_range {
            Some(range) => Self {
                price_min: range.min,
                price_max: range.max,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Select or deselect a color.
    pub fn toggle_color(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.selected_colors.remove(&name) {
            self.selected_colors.insert(name);
        }
        self
    }

    /// Select or deselect a size tag.
    pub fn toggle_size(mut self, size: SizeTag) -> Self {
        if !self.selected_sizes.remove(&size) {
            self.selected_sizes.insert(size);
        }
        self
    }

    /// Replace the color selection.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the size selection.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = SizeTag>) -> Self {
        self.selected_sizes = sizes.into_iter().collect();
        self
    }

    /// Set the lower price bound; `None` removes it.
    pub fn with_price_min(mut self, min: Option<u64>) -> Self {
        self.price_min = min.unwrap_or(0);
        self
    }

    /// Set the upper price bound; `None` removes it.
    pub fn with_price_max(mut self, max: Option<u64>) -> Self {
        self.price_max = max.unwrap_or(u64::MAX);
        self
    }

    /// Set the price ordering. Selecting a direction clears popularity sort.
    pub fn with_price_sort(mut self, sort: Option<SortDirection>) -> Self {
        self.price_sort = sort;
        if sort.is_some() {
            self.popularity_sort = None;
        }
        self
    }

    /// Set the popularity ordering. Selecting a direction clears price sort.
    pub fn with_popularity_sort(mut self, sort: Option<SortDirection>) -> Self {
        self.popularity_sort = sort;
        if sort.is_some() {
            self.price_sort = None;
        }
        self
    }

    /// Click handler semantics for the price sort control: choosing the
    /// active direction again clears it, and popularity sort is always cleared.
    pub fn toggle_price_sort(mut self, dir: SortDirection) -> Self {
        self.price_sort = if self.price_sort == Some(dir) { None } else { Some(dir) };
        self.popularity_sort = None;
        self
    }

    /// Click handler semantics for the popularity sort control.
    pub fn toggle_popularity_sort(mut self, dir: SortDirection) -> Self {
        self.popularity_sort = if self.popularity_sort == Some(dir) { None } else { Some(dir) };
        self.price_sort = None;
        self
    }

    /// The sort key the engine applies. Price wins if both are set.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.price_sort
            .map(SortKey::Price)
            .or(self.popularity_sort.map(SortKey::Popularity))
    }

    /// Check whether this spec neither filters nor reorders anything.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty()
            && self.selected_colors.is_empty()
            && self.selected_sizes.is_empty()
            && self.price_min == 0
            && self.price_max == u64::MAX
            && self.sort_key().is_none()
    }

    /// Check whether a product passes every predicate of this spec.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_name(&self.search_text.to_lowercase(), product)
            && self.matches_color(product)
            && self.matches_size(product)
            && self.matches_price(product)
    }

    /// `needle` must already be lowercased.
    pub(crate) fn matches_name(&self, needle: &str, product: &Product) -> bool {
        needle.is_empty() || product.name.to_lowercase().contains(needle)
    }

    pub(crate) fn matches_color(&self, product: &Product) -> bool {
        self.selected_colors.is_empty()
            || product
                .colors
                .iter()
                .any(|c| self.selected_colors.contains(&c.name))
    }

    pub(crate) fn matches_size(&self, product: &Product) -> bool {
        self.selected_sizes.is_empty() || self.selected_sizes.contains(&product.size)
    }

    pub(crate) fn matches_price(&self, product: &Product) -> bool {
        self.price_min <= product.price && product.price <= self.price_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::PriceRange;

    fn dress() -> Product {
        let mut p = Product::new("p1", "Linen Wrap Dress", "linen-wrap-dress", 300_000);
        p.add_color("Maroon", "#800000");
        p.size = SizeTag::M;
        p
    }

    #[test]
    fn test_sort_direction_parsing() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!("high-to-low".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!(matches!(
            "sideways".parse::<SortDirection>(),
            Err(CatalogError::UnknownSort(_))
        ));
    }

    #[test]
    fn test_default_is_unfiltered() {
        assert!(FilterSpec::new().is_unfiltered());
        assert!(!FilterSpec::new().with_search("x").is_unfiltered());
    }

    #[test]
    fn test_seeded_uses_observed_range() {
        let facets = Facets {
            price_range: Some(PriceRange { min: 100, max: 900 }),
            ..Facets::default()
        };
        let spec = FilterSpec::seeded(&facets);
        assert_eq!(spec.price_min, 100);
        assert_eq!(spec.price_max, 900);

        let empty = FilterSpec::seeded(&Facets::default());
        assert!(empty.is_unfiltered());
    }

    #[test]
    fn test_toggle_color() {
        let spec = FilterSpec::new().toggle_color("Maroon");
        assert!(spec.selected_colors.contains("Maroon"));
        let spec = spec.toggle_color("Maroon");
        assert!(spec.selected_colors.is_empty());
    }

    #[test]
    fn test_toggle_price_sort_clears_popularity() {
        let spec = FilterSpec::new()
            .toggle_popularity_sort(SortDirection::Descending)
            .toggle_price_sort(SortDirection::Ascending);
        assert_eq!(spec.price_sort, Some(SortDirection::Ascending));
        assert_eq!(spec.popularity_sort, None);

        let spec = spec.toggle_price_sort(SortDirection::Ascending);
        assert_eq!(spec.price_sort, None);
    }

    #[test]
    fn test_popularity_after_price_clears_price() {
        let spec = FilterSpec::new()
            .with_price_sort(Some(SortDirection::Ascending))
            .with_popularity_sort(Some(SortDirection::Descending));
        assert_eq!(spec.price_sort, None);
        assert_eq!(spec.sort_key(), Some(SortKey::Popularity(SortDirection::Descending)));
    }

    #[test]
    fn test_price_precedence_when_both_set() {
        let spec = FilterSpec {
            price_sort: Some(SortDirection::Descending),
            popularity_sort: Some(SortDirection::Ascending),
            ..FilterSpec::default()
        };
        assert_eq!(spec.sort_key(), Some(SortKey::Price(SortDirection::Descending)));
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        assert!(FilterSpec::new().with_search("WRAP").matches(&dress()));
        assert!(!FilterSpec::new().with_search("skirt").matches(&dress()));
    }

    #[test]
    fn test_matches_color_and_size() {
        let p = dress();
        assert!(FilterSpec::new().toggle_color("Maroon").matches(&p));
        assert!(!FilterSpec::new().toggle_color("Sand").matches(&p));
        assert!(FilterSpec::new().toggle_size(SizeTag::M).matches(&p));
        assert!(!FilterSpec::new().toggle_size(SizeTag::AllSize).matches(&p));
    }

    #[test]
    fn test_matches_price_inclusive() {
        let p = dress();
        let exact = FilterSpec::new()
            .with_price_min(Some(300_000))
            .with_price_max(Some(300_000));
        assert!(exact.matches(&p));

        let inverted = FilterSpec::new()
            .with_price_min(Some(400_000))
            .with_price_max(Some(100_000));
        assert!(!inverted.matches(&p));

        let reset = inverted.with_price_min(None).with_price_max(None);
        assert!(reset.matches(&p));
    }
}
