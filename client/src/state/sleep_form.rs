//! Draft values of the sleep-log form and the views derived from them.
//!
//! Fields hold the raw input strings exactly as typed; everything shown on
//! screen (duration, tier, quality indicator, efficiency preview) is derived
//! on demand through `sleeplog`.

#[cfg(test)]
#[path = "sleep_form_test.rs"]
mod sleep_form_test;

use sleeplog::efficiency::DEFAULT_SLEEP_LATENCY_MINUTES;
use sleeplog::{DurationResult, QualityTier, SleepBreakdown, SleepGoal, classify_quality, compute_from_inputs, validate_sleep_inputs};

pub const DEFAULT_QUALITY: i32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SleepForm {
    pub date: String,
    pub bedtime: String,
    pub wake: String,
    pub goal: String,
    pub quality: i32,
    pub latency_minutes: String,
    pub waso_minutes: String,
    pub notes: String,
}

impl Default for SleepForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            bedtime: String::new(),
            wake: String::new(),
            goal: "8".to_owned(),
            quality: DEFAULT_QUALITY,
            latency_minutes: DEFAULT_SLEEP_LATENCY_MINUTES.to_string(),
            waso_minutes: "0".to_owned(),
            notes: String::new(),
        }
    }
}

/// What the duration readout should show.
#[derive(Clone, Debug, PartialEq)]
pub enum DurationView {
    /// Nothing computed yet.
    Empty,
    Computed(DurationResult),
    /// A time field holds text that is not a time.
    Invalid(String),
}

impl SleepForm {
    pub fn goal(&self) -> SleepGoal {
        SleepGoal::from_input(&self.goal)
    }

    /// Duration for the current inputs. `Empty` while either time is blank.
    pub fn duration_view(&self) -> DurationView {
        match compute_from_inputs(&self.bedtime, &self.wake, self.goal()) {
            Ok(Some(result)) => DurationView::Computed(result),
            Ok(None) => DurationView::Empty,
            Err(e) => DurationView::Invalid(e.to_string()),
        }
    }

    pub fn quality_tier(&self) -> QualityTier {
        classify_quality(self.quality)
    }

    /// Efficiency preview, once both times parse.
    pub fn breakdown(&self) -> Option<SleepBreakdown> {
        let interval = validate_sleep_inputs(&self.bedtime, &self.wake)
            .ok()
            .flatten()?;
        let latency = parse_minutes(&self.latency_minutes, DEFAULT_SLEEP_LATENCY_MINUTES);
        let waso = parse_minutes(&self.waso_minutes, 0);
        Some(SleepBreakdown::compute(interval, latency, waso))
    }

    /// Check the draft before it is posted.
    ///
    /// # Errors
    ///
    /// Returns the message to show inline when submission must be blocked.
    pub fn check_submission(&self) -> Result<(), String> {
        if self.date.trim().is_empty() || self.bedtime.trim().is_empty() || self.wake.trim().is_empty() {
            return Err("Please enter the date, bedtime and wake-up time.".to_owned());
        }
        validate_sleep_inputs(&self.bedtime, &self.wake)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Keep the previous readout while an input is blank, so clearing a field
/// does not wipe the last computed duration.
pub fn next_duration_view(prev: Option<&DurationView>, current: DurationView) -> DurationView {
    match current {
        DurationView::Empty => prev.cloned().unwrap_or(DurationView::Empty),
        other => other,
    }
}

fn parse_minutes(raw: &str, default: u32) -> u32 {
    raw.trim().parse().unwrap_or(default)
}
