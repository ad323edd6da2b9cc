//! Sleep duration between a bedtime and a wake time, with goal classification.
//!
//! A wake time at or before the bedtime is read as the following morning.
//! Durations are rounded to a tenth of an hour before they are compared with
//! the goal, so the displayed number and the tier always agree.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;
use crate::time_of_day::{MINUTES_PER_DAY, TimeOfDay};

#[cfg(test)]
#[path = "duration_test.rs"]
mod duration_test;

pub const DEFAULT_GOAL_HOURS: f64 = 8.0;

/// Slack for comparing a tenth-of-an-hour duration with a decimal goal.
const GOAL_TOLERANCE: f64 = 1e-9;

/// Bedtime and wake time as entered on the log form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepInterval {
    pub bedtime: TimeOfDay,
    pub wake: TimeOfDay,
}

impl SleepInterval {
    #[must_use]
    pub fn new(bedtime: TimeOfDay, wake: TimeOfDay) -> Self {
        Self { bedtime, wake }
    }

    /// True when the wake time falls on the next calendar day.
    #[must_use]
    pub fn wraps_midnight(self) -> bool {
        self.wake <= self.bedtime
    }

    /// Elapsed whole minutes, in `1..=1440`.
    #[must_use]
    pub fn minutes(self) -> u16 {
        let bed = self.bedtime.minutes_since_midnight();
        let wake = self.wake.minutes_since_midnight();
        if self.wraps_midnight() {
            wake + MINUTES_PER_DAY - bed
        } else {
            wake - bed
        }
    }

    /// Unrounded elapsed hours.
    #[must_use]
    pub fn hours(self) -> f64 {
        f64::from(self.minutes()) / 60.0
    }

    /// Elapsed time in tenths of an hour, rounded half up.
    #[must_use]
    pub fn rounded_tenths(self) -> u16 {
        (self.minutes() + 3) / 6
    }
}

/// Nightly sleep target in hours, kept exactly as entered.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepGoal {
    hours: f64,
}

impl SleepGoal {
    /// # Errors
    ///
    /// Returns [`InvalidInputError::InvalidGoal`] unless `hours` is finite and in `(0, 24]`.
    pub fn new(hours: f64) -> Result<Self, InvalidInputError> {
        if !hours.is_finite() || hours <= 0.0 || hours > 24.0 {
            return Err(InvalidInputError::InvalidGoal(hours));
        }
        Ok(Self { hours })
    }

    /// Read a goal from a form field, keeping the default when it is blank or unusable.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        match trimmed.parse::<f64>().ok().map(Self::new) {
            Some(Ok(goal)) => goal,
            _ => {
                tracing::debug!(input = trimmed, "ignoring unusable sleep goal input");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn hours(self) -> f64 {
        self.hours
    }
}

impl Default for SleepGoal {
    fn default() -> Self {
        Self {
            hours: DEFAULT_GOAL_HOURS,
        }
    }
}

/// How a night's duration compares with the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationTier {
    /// At or above the goal.
    Met,
    /// Within one hour below the goal.
    Near,
    /// More than an hour short of the goal.
    Short,
}

impl DurationTier {
    /// Classify a duration already rounded to tenths of an hour.
    #[must_use]
    pub fn classify(tenths: u16, goal: SleepGoal) -> Self {
        let hours = f64::from(tenths) / 10.0 + GOAL_TOLERANCE;
        if hours >= goal.hours {
            Self::Met
        } else if hours >= goal.hours - 1.0 {
            Self::Near
        } else {
            Self::Short
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Met => "met",
            Self::Near => "near",
            Self::Short => "short",
        }
    }
}

/// Rounded duration plus its tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DurationResult {
    /// Hours rounded to one decimal place.
    pub hours: f64,
    pub tier: DurationTier,
}

impl DurationResult {
    /// Display text such as `"7.5 hours"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.1} hours", self.hours)
    }
}

/// Compute the rounded duration of a night and classify it against `goal`.
#[must_use]
pub fn compute_duration(bedtime: TimeOfDay, wake: TimeOfDay, goal: SleepGoal) -> DurationResult {
    let tenths = SleepInterval::new(bedtime, wake).rounded_tenths();
    DurationResult {
        hours: f64::from(tenths) / 10.0,
        tier: DurationTier::classify(tenths, goal),
    }
}

/// Compute from raw form values.
///
/// Returns `Ok(None)` when either field is still blank so callers can leave
/// the display untouched.
///
/// # Errors
///
/// Returns [`InvalidInputError`] when a non-blank field is not a valid time.
pub fn compute_from_inputs(bedtime: &str, wake: &str, goal: SleepGoal) -> Result<Option<DurationResult>, InvalidInputError> {
    if bedtime.trim().is_empty() || wake.trim().is_empty() {
        return Ok(None);
    }
    let bedtime = TimeOfDay::parse(bedtime)?;
    let wake = TimeOfDay::parse(wake)?;
    Ok(Some(compute_duration(bedtime, wake, goal)))
}
