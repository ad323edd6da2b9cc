//! Time-in-bed versus actual sleep.

use serde::{Deserialize, Serialize};

use crate::duration::SleepInterval;

#[cfg(test)]
#[path = "efficiency_test.rs"]
mod efficiency_test;

/// Minutes to fall asleep assumed when the form leaves the field blank.
pub const DEFAULT_SLEEP_LATENCY_MINUTES: u32 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepBreakdown {
    pub time_in_bed_hours: f64,
    /// Time in bed minus latency and wake-after-sleep-onset, floored at zero.
    pub actual_sleep_hours: f64,
    /// Actual sleep as a percentage of time in bed, within `[0, 100]`.
    pub efficiency_percent: f64,
}

impl SleepBreakdown {
    #[must_use]
    pub fn compute(interval: SleepInterval, latency_minutes: u32, waso_minutes: u32) -> Self {
        let time_in_bed_hours = interval.hours();
        let awake_hours = f64::from(latency_minutes) / 60.0 + f64::from(waso_minutes) / 60.0;
        let actual_sleep_hours = (time_in_bed_hours - awake_hours).max(0.0);
        let efficiency_percent = if time_in_bed_hours > 0.0 {
            clamp_percent(actual_sleep_hours / time_in_bed_hours * 100.0)
        } else {
            0.0
        };
        Self {
            time_in_bed_hours,
            actual_sleep_hours,
            efficiency_percent,
        }
    }
}

/// Clamp to `[0, 100]`, mapping NaN to zero. Used for progress-bar widths.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}
