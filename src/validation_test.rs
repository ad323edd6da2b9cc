use super::*;
use crate::error::InvalidInputError;

fn t(raw: &str) -> TimeOfDay {
    TimeOfDay::parse(raw).expect("valid time")
}

#[test]
fn rejects_half_hour_night() {
    let err = validate_sleep_times(t("06:00"), t("06:30")).expect_err("too short");
    assert!(matches!(err, ValidationError::TooShort { hours } if (hours - 0.5).abs() < f64::EPSILON));
    assert_eq!(err.to_string(), "Sleep duration should be at least 1 hour.");
}

#[test]
fn rejects_sixteen_hour_night() {
    let err = validate_sleep_times(t("20:00"), t("12:00")).expect_err("too long");
    assert!(matches!(err, ValidationError::TooLong { hours } if (hours - 16.0).abs() < f64::EPSILON));
    assert_eq!(err.to_string(), "Sleep duration seems unusually long. Please check your times.");
}

#[test]
fn bounds_are_inclusive() {
    assert!(validate_sleep_times(t("06:00"), t("07:00")).is_ok());
    assert!(validate_sleep_times(t("20:00"), t("10:00")).is_ok());
}

#[test]
fn just_outside_bounds_is_rejected() {
    assert!(validate_sleep_times(t("06:00"), t("06:59")).is_err());
    assert!(validate_sleep_times(t("20:00"), t("10:01")).is_err());
}

#[test]
fn identical_times_read_as_a_full_day_and_fail() {
    assert!(matches!(validate_sleep_times(t("23:00"), t("23:00")), Err(ValidationError::TooLong { .. })));
}

#[test]
fn accepted_interval_is_returned() {
    let interval = validate_sleep_times(t("23:00"), t("07:00")).expect("valid");
    assert_eq!(interval.minutes(), 480);
}

#[test]
fn blank_form_fields_skip_validation() {
    assert_eq!(validate_sleep_inputs("", "07:00"), Ok(None));
    assert_eq!(validate_sleep_inputs("23:00", ""), Ok(None));
}

#[test]
fn unparseable_form_fields_are_reported() {
    let err = validate_sleep_inputs("23:00", "seven").expect_err("invalid");
    assert_eq!(err, ValidationError::Invalid(InvalidInputError::Malformed("seven".to_owned())));
}

#[test]
fn valid_form_fields_yield_interval() {
    let interval = validate_sleep_inputs("22:30", "06:30").expect("valid").expect("interval");
    assert_eq!(interval.bedtime, t("22:30"));
}
