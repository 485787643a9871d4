//! Fit module.
//!
//! Classifies a shopper's height and weight against the fixed band table of
//! the one-size range, and builds the fallback contact message for shoppers
//! who fall outside every band.

mod band;
mod measurement;
mod message;
mod models;

pub use band::{evaluate, FitBand, FitResult, FitTable, DEFAULT_BANDS};
pub use measurement::Measurement;
pub use message::{
    build_contact_message, ContactLink, ContactTemplate, DEFAULT_CONTACT_HOST,
    DEFAULT_CONTACT_RECIPIENT, MISSING_MEASUREMENT,
};
pub use models::{size_models, ModelShot, SizeModel};
