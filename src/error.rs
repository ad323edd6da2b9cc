//! Error types for input parsing and form validation.

/// A time or goal input could not be interpreted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    /// The input was blank after trimming.
    #[error("time input is empty")]
    Empty,
    /// The input was not in `HH:MM` (or `HH:MM:SS`) form.
    #[error("invalid time `{0}`; expected HH:MM")]
    Malformed(String),
    /// Hour or minute outside the wall-clock range.
    #[error("time {hour}:{minute} is out of range")]
    OutOfRange { hour: u8, minute: u8 },
    /// Sleep goal must be a finite number of hours in (0, 24].
    #[error("invalid sleep goal {0}; expected hours in (0, 24]")]
    InvalidGoal(f64),
}

/// A sleep interval that parsed but is not plausible for a log entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Sleep duration should be at least 1 hour.")]
    TooShort { hours: f64 },
    #[error("Sleep duration seems unusually long. Please check your times.")]
    TooLong { hours: f64 },
    #[error(transparent)]
    Invalid(#[from] InvalidInputError),
}
