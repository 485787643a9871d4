//! Product catalog module.
//!
//! Contains the read-only records supplied by the content source: products,
//! their colors and size tags, and customer reviews.

mod product;
mod review;

pub use product::{Product, ProductColor, SizeTag, PLACEHOLDER_IMAGE};
pub use review::Review;
