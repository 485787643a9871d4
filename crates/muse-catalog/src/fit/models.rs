//! Reference model photos shown on the fit page.

use serde::{Deserialize, Serialize};

/// Measurements of the house models, in photo order.
const REFERENCE_MEASUREMENTS: [(&str, &str); 5] = [
    ("40kg", "160cm"),
    ("50kg", "165cm"),
    ("55kg", "170cm"),
    ("60kg", "170cm"),
    ("65kg", "175cm"),
];

const FALLBACK_MEASUREMENT: (&str, &str) = ("50kg", "165cm");

/// A model photo and caption from the content source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelShot {
    pub image: String,
    pub desc: String,
}

/// A model photo labelled with the model's measurements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeModel {
    pub weight: String,
    pub height: String,
    pub image: String,
    pub desc: String,
}

/// Pair model shots with the house models' measurements, by position.
pub fn size_models(shots: &[ModelShot]) -> Vec<SizeModel> {
    shots
        .iter()
        .enumerate()
        .map(|(i, shot)| {
            let (weight, height) = REFERENCE_MEASUREMENTS
                .get(i)
                .copied()
                .unwrap_or(FALLBACK_MEASUREMENT);
            SizeModel {
                weight: weight.to_string(),
                height: height.to_string(),
                image: shot.image.clone(),
                desc: shot.desc.clone(),
            }
        })
        .collect()
}
