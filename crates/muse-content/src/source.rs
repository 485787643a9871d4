//! The content source abstraction.

use crate::ContentFetchError;
use async_trait::async_trait;
use muse_catalog::prelude::{ContactTemplate, ModelShot, Product, Review};
use serde::{Deserialize, Serialize};

/// Editorial content of the check-your-fit page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckFitPage {
    pub title: String,
    pub button: String,
    /// Text wrapped around the contact message.
    pub template: ContactTemplate,
    /// Messaging recipient, when the CMS provides one.
    pub phone_number: Option<String>,
}

/// Fit content shown when no product is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultFit {
    /// Product name used in the contact message.
    pub default_product: String,
    pub shots: Vec<ModelShot>,
}

/// Fit content attached to a single product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFit {
    pub product_name: String,
    pub slug: String,
    pub shots: Vec<ModelShot>,
}

/// A read-only source of storefront content.
///
/// `fetch_product` and `fetch_product_fit` return `Ok(None)` when no record
/// has the slug; `fetch_check_fit_page`, `fetch_default_fit`, and
/// `fetch_catalogue_title` return `Ok(None)` when the singleton is unset.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All products, in CMS order.
    async fn fetch_products(&self) -> Result<Vec<Product>, ContentFetchError>;

    /// One product with its description.
    async fn fetch_product(&self, slug: &str) -> Result<Option<Product>, ContentFetchError>;

    /// All reviews.
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ContentFetchError>;

    /// Heading of the catalogue page.
    async fn fetch_catalogue_title(&self) -> Result<Option<String>, ContentFetchError>;

    async fn fetch_check_fit_page(&self) -> Result<Option<CheckFitPage>, ContentFetchError>;

    async fn fetch_default_fit(&self) -> Result<Option<DefaultFit>, ContentFetchError>;

    async fn fetch_product_fit(&self, slug: &str)
        -> Result<Option<ProductFit>, ContentFetchError>;
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory content source for tests.

    use super::*;

    #[derive(Default)]
    pub struct FakeSource {
        pub products: Vec<Product>,
        pub reviews: Vec<Review>,
        pub catalogue_title: Option<String>,
        pub check_fit_page: Option<CheckFitPage>,
        pub default_fit: Option<DefaultFit>,
        pub product_fits: Vec<ProductFit>,
        pub fail: bool,
    }

    impl FakeSource {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn check(&self) -> Result<(), ContentFetchError> {
            if self.fail {
                Err(ContentFetchError::GraphQl(vec!["boom".to_string()]))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ContentSource for FakeSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, ContentFetchError> {
            self.check()?;
            Ok(self.products.clone())
        }

        async fn fetch_product(&self, slug: &str) -> Result<Option<Product>, ContentFetchError> {
            self.check()?;
            Ok(self.products.iter().find(|p| p.slug == slug).cloned())
        }

        async fn fetch_reviews(&self) -> Result<Vec<Review>, ContentFetchError> {
            self.check()?;
            Ok(self.reviews.clone())
        }

        async fn fetch_catalogue_title(&self) -> Result<Option<String>, ContentFetchError> {
            self.check()?;
            Ok(self.catalogue_title.clone())
        }

        async fn fetch_check_fit_page(&self) -> Result<Option<CheckFitPage>, ContentFetchError> {
            self.check()?;
            Ok(self.check_fit_page.clone())
        }

        async fn fetch_default_fit(&self) -> Result<Option<DefaultFit>, ContentFetchError> {
            self.check()?;
            Ok(self.default_fit.clone())
        }

        async fn fetch_product_fit(
            &self,
            slug: &str,
        ) -> Result<Option<ProductFit>, ContentFetchError> {
            self.check()?;
            Ok(self.product_fits.iter().find(|f| f.slug == slug).cloned())
        }
    }
}
