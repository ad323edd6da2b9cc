use super::*;

fn t(raw: &str) -> TimeOfDay {
    TimeOfDay::parse(raw).expect("valid time")
}

// =============================================================
// SleepInterval
// =============================================================

#[test]
fn same_day_interval_is_plain_difference() {
    let interval = SleepInterval::new(t("13:00"), t("14:30"));
    assert!(!interval.wraps_midnight());
    assert_eq!(interval.minutes(), 90);
    assert!((interval.hours() - 1.5).abs() < f64::EPSILON);
}

#[test]
fn earlier_wake_time_wraps_to_next_day() {
    let interval = SleepInterval::new(t("23:00"), t("07:00"));
    assert!(interval.wraps_midnight());
    assert_eq!(interval.minutes(), 8 * 60);
}

#[test]
fn equal_times_count_as_a_full_day() {
    let interval = SleepInterval::new(t("22:00"), t("22:00"));
    assert!(interval.wraps_midnight());
    assert_eq!(interval.minutes(), 24 * 60);
}

#[test]
fn rounded_tenths_rounds_half_up() {
    // 45 minutes = 0.75 h
    assert_eq!(SleepInterval::new(t("00:00"), t("00:45")).rounded_tenths(), 8);
    // 7 h 20 min = 7.333 h
    assert_eq!(SleepInterval::new(t("23:40"), t("07:00")).rounded_tenths(), 73);
    // 7 h 27 min = 7.45 h
    assert_eq!(SleepInterval::new(t("23:33"), t("07:00")).rounded_tenths(), 75);
}

// =============================================================
// compute_duration
// =============================================================

#[test]
fn overnight_eight_hours_meets_default_goal() {
    let result = compute_duration(t("23:00"), t("07:00"), SleepGoal::default());
    assert!((result.hours - 8.0).abs() < f64::EPSILON);
    assert_eq!(result.tier, DurationTier::Met);
    assert_eq!(result.label(), "8.0 hours");
}

#[test]
fn eight_and_a_half_hours_meets_goal() {
    let result = compute_duration(t("22:00"), t("06:30"), SleepGoal::default());
    assert!((result.hours - 8.5).abs() < f64::EPSILON);
    assert_eq!(result.tier, DurationTier::Met);
}

#[test]
fn six_and_a_half_hours_is_short() {
    let result = compute_duration(t("23:30"), t("06:00"), SleepGoal::default());
    assert!((result.hours - 6.5).abs() < f64::EPSILON);
    assert_eq!(result.tier, DurationTier::Short);
}

#[test]
fn within_an_hour_of_goal_is_near() {
    let result = compute_duration(t("23:30"), t("07:00"), SleepGoal::default());
    assert_eq!(result.tier, DurationTier::Near);
    let boundary = compute_duration(t("00:00"), t("07:00"), SleepGoal::default());
    assert_eq!(boundary.tier, DurationTier::Near);
}

#[test]
fn classification_compares_the_rounded_value() {
    // 7 h 57 min rounds to 8.0 and therefore meets an 8 h goal.
    let result = compute_duration(t("23:03"), t("07:00"), SleepGoal::default());
    assert!((result.hours - 8.0).abs() < f64::EPSILON);
    assert_eq!(result.tier, DurationTier::Met);
}

#[test]
fn same_day_nap_uses_direct_difference() {
    let goal = SleepGoal::new(1.5).expect("goal");
    let result = compute_duration(t("13:00"), t("14:30"), goal);
    assert!((result.hours - 1.5).abs() < f64::EPSILON);
    assert_eq!(result.tier, DurationTier::Met);
}

#[test]
fn custom_goal_shifts_tiers() {
    let goal = SleepGoal::new(9.0).expect("goal");
    assert_eq!(compute_duration(t("23:00"), t("07:00"), goal).tier, DurationTier::Near);
    assert_eq!(compute_duration(t("23:00"), t("06:30"), goal).tier, DurationTier::Short);
}

#[test]
fn small_goal_never_reports_short() {
    let goal = SleepGoal::new(0.5).expect("goal");
    assert_eq!(compute_duration(t("10:00"), t("10:06"), goal).tier, DurationTier::Near);
}

#[test]
fn goal_is_not_rounded_before_comparison() {
    let goal = SleepGoal::new(7.74).expect("goal");
    assert!((goal.hours() - 7.74).abs() < f64::EPSILON);
    // 7 h 42 min shows as 7.7, which is still below 7.74.
    assert_eq!(compute_duration(t("23:42"), t("07:24"), goal).tier, DurationTier::Near);
    // 6.7 is more than an hour below 7.74.
    assert_eq!(compute_duration(t("00:18"), t("07:00"), goal).tier, DurationTier::Short);
    assert_eq!(compute_duration(t("23:30"), t("07:18"), goal).tier, DurationTier::Met);
}

#[test]
fn tiny_goal_is_not_collapsed_to_zero() {
    let goal = SleepGoal::new(0.04).expect("goal");
    assert!(goal.hours() > 0.0);
    assert_eq!(compute_duration(t("10:00"), t("10:02"), goal).tier, DurationTier::Near);
}

#[test]
fn decimal_goal_boundaries_are_inclusive() {
    let goal = SleepGoal::new(7.3).expect("goal");
    assert_eq!(compute_duration(t("23:42"), t("07:00"), goal).tier, DurationTier::Met);
    let near_edge = SleepGoal::new(8.3).expect("goal");
    assert_eq!(compute_duration(t("23:42"), t("07:00"), near_edge).tier, DurationTier::Near);
}

#[test]
fn computation_is_idempotent() {
    let a = compute_duration(t("22:15"), t("05:50"), SleepGoal::default());
    let b = compute_duration(t("22:15"), t("05:50"), SleepGoal::default());
    assert_eq!(a, b);
}

// =============================================================
// compute_from_inputs
// =============================================================

#[test]
fn blank_inputs_are_a_no_op() {
    assert_eq!(compute_from_inputs("", "07:00", SleepGoal::default()), Ok(None));
    assert_eq!(compute_from_inputs("23:00", "  ", SleepGoal::default()), Ok(None));
}

#[test]
fn malformed_inputs_are_reported() {
    let err = compute_from_inputs("11pm", "07:00", SleepGoal::default()).expect_err("should fail");
    assert_eq!(err, InvalidInputError::Malformed("11pm".to_owned()));
}

#[test]
fn valid_inputs_produce_result() {
    let result = compute_from_inputs("23:00", "07:00", SleepGoal::default())
        .expect("parse")
        .expect("result");
    assert_eq!(result.tier, DurationTier::Met);
}

// =============================================================
// SleepGoal
// =============================================================

#[test]
fn goal_defaults_to_eight_hours() {
    assert!((SleepGoal::default().hours() - DEFAULT_GOAL_HOURS).abs() < f64::EPSILON);
}

#[test]
fn goal_rejects_non_positive_and_oversized_values() {
    assert!(SleepGoal::new(0.0).is_err());
    assert!(SleepGoal::new(-1.0).is_err());
    assert!(SleepGoal::new(24.5).is_err());
    assert!(SleepGoal::new(f64::NAN).is_err());
    assert!(SleepGoal::new(24.0).is_ok());
}

#[test]
fn goal_from_input_falls_back_to_default() {
    assert_eq!(SleepGoal::from_input(""), SleepGoal::default());
    assert_eq!(SleepGoal::from_input("lots"), SleepGoal::default());
    assert_eq!(SleepGoal::from_input("-3"), SleepGoal::default());
    assert!((SleepGoal::from_input("7.5").hours() - 7.5).abs() < f64::EPSILON);
}

#[test]
fn tier_serializes_lowercase() {
    assert_eq!(serde_json::to_value(DurationTier::Near).expect("json"), serde_json::json!("near"));
    assert_eq!(DurationTier::Short.as_str(), "short");
}
