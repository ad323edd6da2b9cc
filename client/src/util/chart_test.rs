use super::*;

fn data(dates: &[&str], durations: &[f64], qualities: &[f64]) -> SleepData {
    SleepData {
        dates: dates.iter().map(|d| (*d).to_owned()).collect(),
        durations: durations.to_vec(),
        qualities: qualities.to_vec(),
    }
}

#[test]
fn empty_history_has_no_geometry() {
    assert_eq!(ChartGeometry::from_data(&SleepData::default()), None);
}

#[test]
fn series_share_zero_based_axis() {
    let geometry = ChartGeometry::from_data(&data(
        &["2024-03-01", "2024-03-02", "2024-03-03"],
        &[8.0, 4.0, 0.0],
        &[10.0, 5.0],
    ))
    .expect("geometry");
    assert!((geometry.y_max - 10.0).abs() < f64::EPSILON);
    assert_eq!(geometry.duration_points, "24.0,62.4 300.0,139.2 576.0,216.0");
    // Missing trailing quality plots at zero.
    assert_eq!(geometry.quality_points, "24.0,24.0 300.0,120.0 576.0,216.0");
    assert_eq!(geometry.labels.len(), 3);
}

#[test]
fn single_night_is_centered() {
    let geometry = ChartGeometry::from_data(&data(&["2024-03-01"], &[7.0], &[7.0])).expect("geometry");
    assert_eq!(geometry.duration_points, "300.0,24.0");
}

#[test]
fn all_zero_values_keep_a_positive_axis() {
    let geometry = ChartGeometry::from_data(&data(&["2024-03-01"], &[0.0], &[0.0])).expect("geometry");
    assert!((geometry.y_max - 1.0).abs() < f64::EPSILON);
}
