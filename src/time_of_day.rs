//! Wall-clock times with no date component.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::InvalidInputError;

#[cfg(test)]
#[path = "time_of_day_test.rs"]
mod time_of_day_test;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

const HOUR_MINUTE: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");
const HOUR_MINUTE_SECOND: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

/// An (hour, minute) pair as entered in a `<input type="time">`.
///
/// Ordering is chronological within a single day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build a time from components.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::OutOfRange`] unless `hour < 24` and `minute < 60`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidInputError> {
        if hour >= 24 || minute >= 60 {
            return Err(InvalidInputError::OutOfRange { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Parse `HH:MM` text. `HH:MM:SS` is also accepted and the seconds dropped.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Empty`] for blank input and
    /// [`InvalidInputError::Malformed`] for anything else that is not a time.
    pub fn parse(raw: &str) -> Result<Self, InvalidInputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidInputError::Empty);
        }
        let parsed = Time::parse(trimmed, HOUR_MINUTE)
            .or_else(|_| Time::parse(trimmed, HOUR_MINUTE_SECOND))
            .map_err(|_| InvalidInputError::Malformed(trimmed.to_owned()))?;
        Ok(Self::from(parsed))
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }

    #[must_use]
    pub fn minutes_since_midnight(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl From<Time> for TimeOfDay {
    fn from(value: Time) -> Self {
        Self {
            hour: value.hour(),
            minute: value.minute(),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = InvalidInputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
