//! Catalogue page view.

use crate::ContentSource;
use muse_catalog::prelude::{derive_facets, query, Facets, FilterSpec, Product};

/// Title shown when the CMS has none.
pub const DEFAULT_CATALOGUE_TITLE: &str = "Catalogue";

/// Products loaded once from a content source, with their facets.
///
/// Loading never fails: a source error is logged and the view comes up
/// empty, so a broken CMS shows an empty catalogue rather than an error.
#[derive(Debug, Clone)]
pub struct CatalogueView {
    title: String,
    products: Vec<Product>,
    facets: Facets,
    default_spec: FilterSpec,
}

impl Default for CatalogueView {
    fn default() -> Self {
        Self::from_products(Vec::new())
    }
}

impl CatalogueView {
    /// Fetch products and the page title from `source`.
    pub async fn load(source: &dyn ContentSource) -> Self {
        let products = match source.fetch_products().await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch products");
                Vec::new()
            }
        };

        let title = match source.fetch_catalogue_title().await {
            Ok(title) => title,
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch catalogue page");
                None
            }
        };

        let mut view = Self::from_products(products);
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            view.title = title;
        }
        view
    }

    /// Build a view over products that are already in memory.
    pub fn from_products(products: Vec<Product>) -> Self {
        let facets = derive_facets(&products);
        let default_spec = FilterSpec::seeded(&facets);
        tracing::debug!(
            products = products.len(),
            colors = facets.colors.len(),
            sizes = facets.sizes.len(),
            "catalogue loaded"
        );
        Self {
            title: DEFAULT_CATALOGUE_TITLE.to_string(),
            products,
            facets,
            default_spec,
        }
    }

    /// Visible products for `spec`, in display order.
    pub fn query(&self, spec: &FilterSpec) -> Vec<&Product> {
        query(&self.products, spec)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    /// The filter state the page starts in: price bounds at the observed
    /// range, nothing else selected.
    pub fn default_spec(&self) -> &FilterSpec {
        &self.default_spec
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }
}
