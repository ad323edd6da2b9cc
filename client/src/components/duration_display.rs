//! Live sleep-duration readout for the log form.

use leptos::prelude::*;

use crate::state::sleep_form::{DurationView, SleepForm, next_duration_view};
use crate::util::classes::duration_class;

/// Recomputes whenever the form changes; blank inputs leave the last value shown.
#[component]
pub fn DurationDisplay(form: RwSignal<SleepForm>) -> impl IntoView {
    let view_state = Memo::new(move |prev: Option<&DurationView>| next_duration_view(prev, form.with(SleepForm::duration_view)));

    let class = move || match view_state.get() {
        DurationView::Computed(result) => duration_class(result.tier),
        DurationView::Invalid(_) => "metric-value text-danger",
        DurationView::Empty => "metric-value",
    };

    let text = move || match view_state.get() {
        DurationView::Computed(result) => result.label(),
        DurationView::Invalid(message) => {
            #[cfg(feature = "csr")]
            log::warn!("duration not computed: {message}");
            message
        }
        DurationView::Empty => "--".to_owned(),
    };

    view! {
        <div class="metric">
            <span class="metric-label">"Time in bed"</span>
            <span id="calculatedDuration" class=class>{text}</span>
        </div>
    }
}
