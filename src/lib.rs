//! Sleep-log domain logic shared by the browser client and the CLI.
//!
//! This crate is UI-framework agnostic: it parses time-of-day inputs,
//! computes overnight sleep durations, classifies them against a goal, and
//! models the history payload used for charting and export. Presentation
//! (CSS classes, DOM updates) lives in `client`.

pub mod duration;
pub mod efficiency;
pub mod error;
pub mod history;
pub mod quality;
pub mod theme;
pub mod time_of_day;
pub mod validation;

pub use duration::{DurationResult, DurationTier, SleepGoal, SleepInterval, compute_duration, compute_from_inputs};
pub use efficiency::{SleepBreakdown, clamp_percent};
pub use error::{InvalidInputError, ValidationError};
pub use history::{ExportFormat, SleepData, SleepRecord, SleepSummary};
pub use quality::{QualityTier, classify_quality};
pub use theme::{MemoryStore, PreferenceStore, Theme};
pub use time_of_day::TimeOfDay;
pub use validation::{validate_sleep_inputs, validate_sleep_times};
