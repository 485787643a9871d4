//! Shopper measurements.

use crate::error::CatalogError;
use crate::fit::{FitResult, FitTable};
use serde::{Deserialize, Serialize};

/// A validated height/weight pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Measurement {
    /// Parse form input. Both values must be present, numeric, finite, and
    /// strictly positive.
    pub fn parse(height: &str, weight: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            height_cm: parse_positive("height", height)?,
            weight_kg: parse_positive("weight", weight)?,
        })
    }

    /// Check whether form input would pass [`Measurement::parse`].
    pub fn is_valid_input(height: &str, weight: &str) -> bool {
        Self::parse(height, weight).is_ok()
    }

    /// Classify against the given band table.
    pub fn evaluate_with(&self, table: &FitTable) -> FitResult {
        table.evaluate(self.height_cm, self.weight_kg)
    }

    /// Classify against the default band table.
    pub fn evaluate(&self) -> FitResult {
        self.evaluate_with(&FitTable::default())
    }
}

fn parse_positive(field: &str, raw: &str) -> Result<f64, CatalogError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CatalogError::InvalidMeasurement(format!("{} is required", field)));
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| CatalogError::InvalidMeasurement(format!("{} must be a number", field)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(CatalogError::InvalidMeasurement(format!(
            "{} must be greater than zero",
            field
        )));
    }

    Ok(value)
}
