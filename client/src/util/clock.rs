//! Wall-clock strings for the navbar clock.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Time};

/// Refresh interval for the clock display.
pub const CLOCK_REFRESH_MS: u32 = 60_000;

const CLOCK_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[month]/[day]/[year]");

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockText {
    pub time: String,
    pub date: String,
}

impl ClockText {
    pub fn new(date: Date, time: Time) -> Self {
        Self {
            time: time.format(CLOCK_FORMAT).unwrap_or_default(),
            date: date.format(DATE_FORMAT).unwrap_or_default(),
        }
    }
}

/// Current local time from the browser; empty text natively.
pub fn now() -> ClockText {
    #[cfg(feature = "csr")]
    {
        let js = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let date = time::Month::try_from((js.get_month() + 1) as u8)
            .ok()
            .and_then(|month| Date::from_calendar_date(js.get_full_year() as i32, month, js.get_date() as u8).ok());
        #[allow(clippy::cast_possible_truncation)]
        let time = Time::from_hms(js.get_hours() as u8, js.get_minutes() as u8, 0).ok();
        match (date, time) {
            (Some(date), Some(time)) => ClockText::new(date, time),
            _ => ClockText::default(),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        ClockText::default()
    }
}
