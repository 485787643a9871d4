//! Product, color, and size types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Image shown when a product has no images of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// Size tag attached to a product.
///
/// The storefront sells mostly one-size garments, tagged with the
/// [`SizeTag::AllSize`] sentinel. Tags the catalogue does not know are kept
/// verbatim so they still work as filter keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SizeTag {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    /// Fits all sizes.
    #[default]
    AllSize,
    Other(String),
}

impl SizeTag {
    pub fn as_str(&self) -> &str {
        match self {
            SizeTag::Xs => "XS",
            SizeTag::S => "S",
            SizeTag::M => "M",
            SizeTag::L => "L",
            SizeTag::Xl => "XL",
            SizeTag::Xxl => "XXL",
            SizeTag::AllSize => "all_size",
            SizeTag::Other(tag) => tag,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "xs" => SizeTag::Xs,
            "s" => SizeTag::S,
            "m" => SizeTag::M,
            "l" => SizeTag::L,
            "xl" => SizeTag::Xl,
            "xxl" => SizeTag::Xxl,
            "all_size" | "all size" | "allsize" => SizeTag::AllSize,
            _ => SizeTag::Other(s.trim().to_string()),
        }
    }

    /// Label shown to shoppers.
    pub fn display_name(&self) -> &str {
        match self {
            SizeTag::AllSize => "All Size",
            other => other.as_str(),
        }
    }

    /// Check if this is the "fits all sizes" sentinel.
    pub fn is_all_size(&self) -> bool {
        matches!(self, SizeTag::AllSize)
    }
}

impl From<String> for SizeTag {
    fn from(s: String) -> Self {
        SizeTag::from_str(&s)
    }
}

impl From<SizeTag> for String {
    fn from(tag: SizeTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for SizeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A named color swatch (e.g., Maroon: #800000).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductColor {
    /// Color name, used as the filter key.
    pub name: String,
    /// Hex value for the swatch.
    pub hex: String,
}

impl ProductColor {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// A product in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Price in whole Rupiah.
    pub price: u64,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Available colors, in display order.
    pub colors: Vec<ProductColor>,
    /// Size tag.
    pub size: SizeTag,
    /// Units sold, used for popularity ordering.
    pub sold_count: u64,
    /// Image URLs; the first one is the thumbnail.
    pub images: Vec<String>,
    /// Structured-text description, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<serde_json::Value>,
}

impl Product {
    /// Create a product with no colors, images, or sales.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            price,
            rating: 0.0,
            colors: Vec::new(),
            size: SizeTag::AllSize,
            sold_count: 0,
            images: Vec::new(),
            description: None,
        }
    }

    /// Add a color to this product.
    pub fn add_color(&mut self, name: impl Into<String>, hex: impl Into<String>) {
        let color = ProductColor::new(name, hex);
        if !self.colors.contains(&color) {
            self.colors.push(color);
        }
    }

    /// Check if the product comes in a color with the given name.
    pub fn has_color(&self, name: &str) -> bool {
        self.colors.iter().any(|c| c.name == name)
    }

    /// The canonical image, if any.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The canonical image, or `placeholder` when the product has none.
    pub fn thumbnail_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.thumbnail().unwrap_or(placeholder)
    }
}
