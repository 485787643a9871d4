//! Search module.
//!
//! Contains the catalogue filter spec, facet derivation, and the pure query
//! engine that turns a product list plus a spec into the visible ordering.

mod facets;
mod filter;
mod query;

pub use facets::{derive_facets, ColorFacet, Facets, PriceRange};
pub use filter::{FilterSpec, SortDirection, SortKey};
pub use query::{query, query_owned};
