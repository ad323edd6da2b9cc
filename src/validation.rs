//! Plausibility guard run before a sleep log is submitted.

use crate::duration::SleepInterval;
use crate::error::ValidationError;
use crate::time_of_day::TimeOfDay;

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Shortest accepted night, inclusive.
pub const MIN_SLEEP_MINUTES: u16 = 60;
/// Longest accepted night, inclusive.
pub const MAX_SLEEP_MINUTES: u16 = 14 * 60;

/// Accept an interval only if it lasts between 1 and 14 hours inclusive.
///
/// Bounds are checked against the exact minute count, not the rounded display value.
///
/// # Errors
///
/// Returns [`ValidationError::TooShort`] or [`ValidationError::TooLong`].
pub fn validate_sleep_times(bedtime: TimeOfDay, wake: TimeOfDay) -> Result<SleepInterval, ValidationError> {
    let interval = SleepInterval::new(bedtime, wake);
    let minutes = interval.minutes();
    if minutes < MIN_SLEEP_MINUTES {
        tracing::debug!(%bedtime, %wake, minutes, "sleep interval too short");
        return Err(ValidationError::TooShort { hours: interval.hours() });
    }
    if minutes > MAX_SLEEP_MINUTES {
        tracing::debug!(%bedtime, %wake, minutes, "sleep interval too long");
        return Err(ValidationError::TooLong { hours: interval.hours() });
    }
    Ok(interval)
}

/// Validate raw form values.
///
/// Blank fields are left to the form's required-field check and yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`ValidationError::Invalid`] for unparseable times, otherwise as
/// [`validate_sleep_times`].
pub fn validate_sleep_inputs(bedtime: &str, wake: &str) -> Result<Option<SleepInterval>, ValidationError> {
    if bedtime.trim().is_empty() || wake.trim().is_empty() {
        return Ok(None);
    }
    let bedtime = TimeOfDay::parse(bedtime)?;
    let wake = TimeOfDay::parse(wake)?;
    validate_sleep_times(bedtime, wake).map(Some)
}
