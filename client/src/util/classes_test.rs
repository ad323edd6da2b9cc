use super::*;

#[test]
fn duration_tiers_map_to_traffic_light_classes() {
    assert_eq!(duration_class(DurationTier::Met), "metric-value text-success");
    assert_eq!(duration_class(DurationTier::Near), "metric-value text-warning");
    assert_eq!(duration_class(DurationTier::Short), "metric-value text-danger");
}

#[test]
fn quality_tiers_map_to_indicator_classes() {
    assert_eq!(quality_class(QualityTier::Excellent), "quality-indicator quality-excellent");
    assert_eq!(quality_class(QualityTier::Poor), "quality-indicator quality-poor");
}
