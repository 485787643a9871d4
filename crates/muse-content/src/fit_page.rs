//! Check-your-fit page.

use crate::ContentSource;
use muse_catalog::prelude::{
    build_contact_message, size_models, CatalogError, ContactLink, ContactTemplate, FitTable,
    Measurement, SizeModel,
};
use serde::Serialize;

/// Page heading when the CMS has none.
pub const DEFAULT_TITLE: &str = "Check Your Fit";

/// Button label when the CMS has none.
pub const DEFAULT_BUTTON: &str = "Check It Out!";

const PRODUCT_NOT_FOUND: &str = "Product not found";
const DEFAULT_FIT_NOT_FOUND: &str = "Default fit data not found";
const LOAD_FAILED: &str = "Failed to load data";

/// Result of checking a shopper's measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FitOutcome {
    /// The input did not pass validation; nothing was evaluated.
    Invalid { reason: String },
    /// The all-size garment fits.
    Fits,
    /// No band matched; the shopper is pointed at a human.
    NoMatch { message: String, url: String },
}

/// Everything the fit page needs, loaded from a content source.
///
/// Loading never fails outright. Missing content falls back to the default
/// copy, an empty contact template, and the fallback recipient; `error`
/// carries the message to show when the product or default fit record
/// could not be loaded.
#[derive(Debug, Clone, Serialize)]
pub struct FitPage {
    pub title: String,
    pub button: String,
    pub template: ContactTemplate,
    pub contact: ContactLink,
    /// Name of the selected product, if one was requested and found.
    pub product_name: Option<String>,
    /// Name used in the contact message when no product is selected.
    pub default_product: String,
    pub models: Vec<SizeModel>,
    pub error: Option<String>,
    #[serde(skip)]
    table: FitTable,
}

impl FitPage {
    /// A page with the default copy and no CMS content.
    pub fn new(fallback: &ContactLink) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            button: DEFAULT_BUTTON.to_string(),
            template: ContactTemplate::default(),
            contact: fallback.clone(),
            product_name: None,
            default_product: String::new(),
            models: Vec::new(),
            error: None,
            table: FitTable::default(),
        }
    }

    /// Load the page content, then either the product's fit shots (when
    /// `product_slug` is given) or the default fit record.
    pub async fn load(
        source: &dyn ContentSource,
        product_slug: Option<&str>,
        fallback: &ContactLink,
    ) -> Self {
        let mut page = Self::new(fallback);
        if let Err(e) = page.fill(source, product_slug).await {
            tracing::error!(error = %e, "failed to load fit page");
            page.error = Some(LOAD_FAILED.to_string());
        }
        page
    }

    async fn fill(
        &mut self,
        source: &dyn ContentSource,
        product_slug: Option<&str>,
    ) -> Result<(), crate::ContentFetchError> {
        if let Some(content) = source.fetch_check_fit_page().await? {
            if !content.title.trim().is_empty() {
                self.title = content.title;
            }
            if !content.button.trim().is_empty() {
                self.button = content.button;
            }
            self.template = content.template;
            if let Some(recipient) = content.phone_number {
                self.contact.recipient = recipient;
            }
        }

        match product_slug {
            Some(slug) => match source.fetch_product_fit(slug).await? {
                Some(fit) => {
                    self.product_name = Some(fit.product_name);
                    self.models = size_models(&fit.shots);
                }
                None => {
                    tracing::warn!(slug, "fit page requested for unknown product");
                    self.error = Some(PRODUCT_NOT_FOUND.to_string());
                }
            },
            None => match source.fetch_default_fit().await? {
                Some(fit) => {
                    self.default_product = fit.default_product;
                    self.models = size_models(&fit.shots);
                }
                None => self.error = Some(DEFAULT_FIT_NOT_FOUND.to_string()),
            },
        }
        Ok(())
    }

    /// Replace the band table used by [`FitPage::check`].
    pub fn with_table(mut self, table: FitTable) -> Self {
        self.table = table;
        self
    }

    /// Whether the check button should be enabled for this input.
    pub fn can_check(&self, height: &str, weight: &str) -> bool {
        Measurement::is_valid_input(height, weight)
    }

    /// Validate and classify raw form input.
    pub fn check(&self, height: &str, weight: &str) -> FitOutcome {
        let measurement = match Measurement::parse(height, weight) {
            Ok(m) => m,
            Err(CatalogError::InvalidMeasurement(reason)) => return FitOutcome::Invalid { reason },
            Err(e) => {
                return FitOutcome::Invalid {
                    reason: e.to_string(),
                }
            }
        };

        if measurement.evaluate_with(&self.table).fits {
            FitOutcome::Fits
        } else {
            let message = self.contact_message(height, weight);
            let url = self.contact.url(&message);
            FitOutcome::NoMatch { message, url }
        }
    }

    /// The contact message for the given raw input.
    pub fn contact_message(&self, height: &str, weight: &str) -> String {
        build_contact_message(
            self.product_name.as_deref(),
            &self.default_product,
            height,
            weight,
            &self.template,
        )
    }
}
