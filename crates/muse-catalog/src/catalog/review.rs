//! Customer reviews.

use crate::ids::ReviewId;
use serde::{Deserialize, Serialize};

/// Highest star count a review can show.
pub const MAX_STARS: u8 = 5;

/// A customer review shown on the home and product pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: ReviewId,
    pub title: String,
    /// Star rating as entered in the CMS; may fall outside 0..=5.
    pub stars: i64,
    pub review: String,
    pub author: String,
}

impl Review {
    /// Number of filled stars to render, clamped to 0..=5.
    pub fn filled_stars(&self) -> u8 {
        self.stars.clamp(0, MAX_STARS as i64) as u8
    }

    /// Number of outlined stars to render next to the filled ones.
    pub fn empty_stars(&self) -> u8 {
        MAX_STARS - self.filled_stars()
    }
}
