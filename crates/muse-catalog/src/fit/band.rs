//! Height/weight band table and eligibility evaluation.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::debug;

/// A height × weight rectangle, inclusive on every edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitBand {
    /// Height range in whole centimetres.
    pub height_cm: RangeInclusive<u32>,
    /// Weight range in whole kilograms.
    pub weight_kg: RangeInclusive<u32>,
}

impl FitBand {
    pub const fn new(height_cm: RangeInclusive<u32>, weight_kg: RangeInclusive<u32>) -> Self {
        Self {
            height_cm,
            weight_kg,
        }
    }

    /// Check if the band contains the point.
    pub fn contains(&self, height_cm: u32, weight_kg: u32) -> bool {
        self.height_cm.contains(&height_cm) && self.weight_kg.contains(&weight_kg)
    }
}

/// Bands covered by the all-size range.
pub const DEFAULT_BANDS: [FitBand; 4] = [
    FitBand::new(150..=155, 40..=50),
    FitBand::new(156..=165, 45..=60),
    FitBand::new(166..=175, 48..=63),
    FitBand::new(176..=180, 50..=65),
];

/// Outcome of a fit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FitResult {
    pub fits: bool,
}

/// An ordered list of bands; a point fits if any band contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitTable {
    bands: Vec<FitBand>,
}

impl Default for FitTable {
    fn default() -> Self {
        Self::new(DEFAULT_BANDS.to_vec())
    }
}

impl FitTable {
    pub fn new(bands: Vec<FitBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[FitBand] {
        &self.bands
    }

    /// Add a band at the end of the table.
    pub fn push(&mut self, band: FitBand) {
        self.bands.push(band);
    }

    /// Index of the first band containing the measurement, if any.
    ///
    /// Measurements are truncated toward zero to whole units before the
    /// check, so 155.9 cm is read as 155 cm. Non-finite and non-positive
    /// values never match.
    pub fn matching_band(&self, height_cm: f64, weight_kg: f64) -> Option<usize> {
        let height = whole_units(height_cm)?;
        let weight = whole_units(weight_kg)?;
        self.bands.iter().position(|b| b.contains(height, weight))
    }

    /// Classify a measurement against the table.
    pub fn evaluate(&self, height_cm: f64, weight_kg: f64) -> FitResult {
        let band = self.matching_band(height_cm, weight_kg);
        debug!(height_cm, weight_kg, ?band, "fit check");
        FitResult {
            fits: band.is_some(),
        }
    }
}

/// Classify a measurement against [`DEFAULT_BANDS`].
pub fn evaluate(height_cm: f64, weight_kg: f64) -> FitResult {
    FitTable::default().evaluate(height_cm, weight_kg)
}

fn whole_units(value: f64) -> Option<u32> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    Some(value.trunc().min(u32::MAX as f64) as u32)
}
