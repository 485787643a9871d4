//! Catalog error types.

use thiserror::Error;

/// Errors raised while turning user input into catalog values.
///
/// The query engine and fit evaluator themselves never fail; these errors
/// belong to the parsing step in front of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Unknown sort direction keyword.
    #[error("Unknown sort direction: {0}")]
    UnknownSort(String),

    /// Height or weight is missing, non-numeric, or not positive.
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),
}
