use super::*;

#[test]
fn parse_accepts_hour_minute() {
    let t = TimeOfDay::parse("23:05").expect("time");
    assert_eq!(t.hour(), 23);
    assert_eq!(t.minute(), 5);
    assert_eq!(t.minutes_since_midnight(), 23 * 60 + 5);
}

#[test]
fn parse_accepts_seconds_and_truncates_them() {
    let t = TimeOfDay::parse("06:30:59").expect("time");
    assert_eq!(t, TimeOfDay::new(6, 30).expect("time"));
}

#[test]
fn parse_trims_surrounding_whitespace() {
    assert_eq!(TimeOfDay::parse("  07:00 ").expect("time").to_string(), "07:00");
}

#[test]
fn parse_rejects_blank_input() {
    assert_eq!(TimeOfDay::parse("   "), Err(InvalidInputError::Empty));
}

#[test]
fn parse_rejects_garbage_and_out_of_range_hours() {
    assert!(matches!(TimeOfDay::parse("bedtime"), Err(InvalidInputError::Malformed(_))));
    assert!(matches!(TimeOfDay::parse("24:00"), Err(InvalidInputError::Malformed(_))));
    assert!(matches!(TimeOfDay::parse("12:60"), Err(InvalidInputError::Malformed(_))));
}

#[test]
fn new_rejects_out_of_range_components() {
    assert_eq!(TimeOfDay::new(24, 0), Err(InvalidInputError::OutOfRange { hour: 24, minute: 0 }));
    assert_eq!(TimeOfDay::new(3, 60), Err(InvalidInputError::OutOfRange { hour: 3, minute: 60 }));
}

#[test]
fn ordering_is_chronological_within_a_day() {
    let early = TimeOfDay::new(6, 0).expect("time");
    let late = TimeOfDay::new(22, 30).expect("time");
    assert!(early < late);
}

#[test]
fn serde_uses_hh_mm_strings() {
    let t = TimeOfDay::new(9, 5).expect("time");
    assert_eq!(serde_json::to_value(t).expect("json"), serde_json::json!("09:05"));
    let back: TimeOfDay = serde_json::from_str("\"21:45\"").expect("decode");
    assert_eq!(back, TimeOfDay::new(21, 45).expect("time"));
    assert!(serde_json::from_str::<TimeOfDay>("\"nope\"").is_err());
}
