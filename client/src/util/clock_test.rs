use super::*;
use time::macros::{date, time};

#[test]
fn formats_zero_padded_time_and_date() {
    let text = ClockText::new(date!(2024 - 03 - 07), time!(6:05));
    assert_eq!(text.time, "06:05");
    assert_eq!(text.date, "03/07/2024");
}

#[test]
fn formats_late_evening() {
    let text = ClockText::new(date!(2024 - 12 - 31), time!(23:59));
    assert_eq!(text.time, "23:59");
}

#[cfg(not(feature = "csr"))]
#[test]
fn now_is_empty_natively() {
    assert_eq!(now(), ClockText::default());
}
