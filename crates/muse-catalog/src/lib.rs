//! Storefront domain logic for Muse.
//!
//! This crate holds the pure, I/O-free core of the storefront:
//!
//! - **Catalog**: Products, colors, size tags, reviews
//! - **Search**: Filter specs, facet derivation, the catalogue query engine
//! - **Fit**: Height/weight band table, eligibility evaluation, contact messages
//!
//! # Example
//!
//! ```rust,ignore
//! use muse_catalog::prelude::*;
//!
//! let facets = derive_facets(&products);
//! let spec = FilterSpec::seeded(&facets)
//!     .with_search("dress")
//!     .toggle_price_sort(SortDirection::Ascending);
//!
//! for product in query(&products, &spec) {
//!     println!("{} {}", product.name, format_price(product.price));
//! }
//!
//! if !evaluate(162.0, 55.0).fits {
//!     let message = build_contact_message(None, "Muse Dress", "162", "55", &template);
//!     println!("{}", ContactLink::default().url(&message));
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod fit;
pub mod search;

pub use error::CatalogError;
pub use ids::*;
pub use money::format_price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::format_price;

    // Catalog
    pub use crate::catalog::{Product, ProductColor, Review, SizeTag, PLACEHOLDER_IMAGE};

    // Search
    pub use crate::search::{
        derive_facets, query, query_owned, ColorFacet, Facets, FilterSpec, PriceRange,
        SortDirection,
    };

    // Fit
    pub use crate::fit::{
        build_contact_message, evaluate, size_models, ContactLink, ContactTemplate, FitBand,
        FitResult, FitTable, Measurement, ModelShot, SizeModel, MISSING_MEASUREMENT,
    };
}
