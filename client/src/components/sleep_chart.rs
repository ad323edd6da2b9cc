//! Line chart of nightly duration and quality.

use leptos::prelude::*;
use sleeplog::SleepData;

use crate::util::chart::{CHART_HEIGHT, CHART_WIDTH, ChartGeometry, DURATION_COLORS, QUALITY_COLORS};

/// Renders nothing when `data` is empty.
#[component]
pub fn SleepChart(data: SleepData) -> impl IntoView {
    let Some(geometry) = ChartGeometry::from_data(&data) else {
        return view! { <p class="chart-empty">"No sleep data yet."</p> }.into_any();
    };

    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let first = geometry.labels.first().cloned().unwrap_or_default();
    let last = geometry.labels.last().cloned().unwrap_or_default();

    view! {
        <figure class="sleep-chart">
            <ul class="sleep-chart__legend">
                <li style=format!("color: {}", DURATION_COLORS.0)>"Sleep Duration (hours)"</li>
                <li style=format!("color: {}", QUALITY_COLORS.0)>"Sleep Quality (1-10)"</li>
            </ul>
            <svg id="sleepChart" class="sleep-chart__plot" viewBox=view_box role="img">
                <polyline
                    points=geometry.duration_points
                    fill="none"
                    stroke=DURATION_COLORS.0
                    stroke-width="2"
                ></polyline>
                <polyline
                    points=geometry.quality_points
                    fill="none"
                    stroke=QUALITY_COLORS.0
                    stroke-width="2"
                ></polyline>
            </svg>
            <figcaption class="sleep-chart__axis">
                <span>{first}</span>
                <span>{format!("0 – {}", geometry.y_max)}</span>
                <span>{last}</span>
            </figcaption>
        </figure>
    }
    .into_any()
}
