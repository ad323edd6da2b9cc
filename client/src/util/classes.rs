//! Tier to CSS class mapping.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

use sleeplog::{DurationTier, QualityTier};

pub fn duration_class(tier: DurationTier) -> &'static str {
    match tier {
        DurationTier::Met => "metric-value text-success",
        DurationTier::Near => "metric-value text-warning",
        DurationTier::Short => "metric-value text-danger",
    }
}

pub fn quality_class(tier: QualityTier) -> &'static str {
    match tier {
        QualityTier::Excellent => "quality-indicator quality-excellent",
        QualityTier::Good => "quality-indicator quality-good",
        QualityTier::Fair => "quality-indicator quality-fair",
        QualityTier::Poor => "quality-indicator quality-poor",
    }
}
