//! Subjective 1-10 sleep quality rating tiers.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "quality_test.rs"]
mod quality_test;

pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityTier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

/// Step function over the rating: 8+ excellent, 6+ good, 4+ fair, else poor.
#[must_use]
pub fn classify_quality(score: i32) -> QualityTier {
    match score {
        8.. => QualityTier::Excellent,
        6..=7 => QualityTier::Good,
        4..=5 => QualityTier::Fair,
        _ => QualityTier::Poor,
    }
}
