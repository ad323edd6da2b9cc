//! SVG line-chart geometry for the sleep history chart.
//!
//! Two series share one y axis that starts at zero: duration (hours) and
//! quality (1-10). Points are spaced evenly along x in date order.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use sleeplog::SleepData;

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 240.0;
const PADDING: f64 = 24.0;

/// Series colors as `(stroke, fill)`.
pub const DURATION_COLORS: (&str, &str) = ("#4361ee", "rgba(67, 97, 238, 0.1)");
pub const QUALITY_COLORS: (&str, &str) = ("#4cc9f0", "rgba(76, 201, 240, 0.1)");

#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub labels: Vec<String>,
    /// Duration series as an SVG `points` attribute.
    pub duration_points: String,
    pub quality_points: String,
    /// Top of the y axis.
    pub y_max: f64,
}

impl ChartGeometry {
    /// `None` when there is nothing to draw.
    pub fn from_data(data: &SleepData) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let n = data.dates.len();
        let value_at = |series: &[f64], i: usize| series.get(i).copied().filter(|v| v.is_finite()).unwrap_or(0.0);
        let y_max = (0..n)
            .flat_map(|i| [value_at(&data.durations, i), value_at(&data.qualities, i)])
            .fold(1.0_f64, f64::max)
            .ceil();

        let points = |series: &[f64]| {
            (0..n)
                .map(|i| {
                    let (x, y) = project(i, n, value_at(series, i), y_max);
                    format!("{x:.1},{y:.1}")
                })
                .collect::<Vec<_>>()
                .join(" ")
        };

        Some(Self {
            labels: data.dates.clone(),
            duration_points: points(&data.durations),
            quality_points: points(&data.qualities),
            y_max,
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn project(index: usize, count: usize, value: f64, y_max: f64) -> (f64, f64) {
    let plot_w = CHART_WIDTH - 2.0 * PADDING;
    let plot_h = CHART_HEIGHT - 2.0 * PADDING;
    let x = if count <= 1 {
        PADDING + plot_w / 2.0
    } else {
        PADDING + plot_w * index as f64 / (count - 1) as f64
    };
    let y = CHART_HEIGHT - PADDING - plot_h * (value.max(0.0) / y_max);
    (x, y)
}
