//! Sleep-log entry form.
//!
//! The form posts natively to `/sleep_log`; submission is only intercepted
//! when the bedtime/wake pair fails the plausibility guard, in which case the
//! reason is shown inline.

use leptos::prelude::*;
use sleeplog::quality::{MAX_QUALITY, MIN_QUALITY};

use crate::components::duration_display::DurationDisplay;
use crate::components::quality_indicator::QualityIndicator;
use crate::state::sleep_form::SleepForm;

#[component]
pub fn SleepLogPage() -> impl IntoView {
    let form = RwSignal::new(SleepForm::default());
    let error = RwSignal::new(None::<String>);
    let validated = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        validated.set(true);
        match form.with_untracked(SleepForm::check_submission) {
            Ok(()) => error.set(None),
            Err(message) => {
                ev.prevent_default();
                ev.stop_propagation();
                error.set(Some(message));
            }
        }
    };

    let efficiency = move || {
        form.with(SleepForm::breakdown).map(|b| {
            format!(
                "{:.1} h asleep · {:.0}% efficiency",
                b.actual_sleep_hours, b.efficiency_percent
            )
        })
    };

    view! {
        <div class="sleep-log-page">
            <h1>"Log Sleep"</h1>
            <form
                id="sleepLogForm"
                class=move || if validated.get() { "needs-validation was-validated" } else { "needs-validation" }
                action="/sleep_log"
                method="post"
                on:submit=on_submit
            >
                <label class="form-label">
                    "Date"
                    <input
                        type="date"
                        name="date"
                        required=true
                        prop:value=move || form.with(|f| f.date.clone())
                        on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                    />
                </label>
                <label class="form-label">
                    "Bedtime"
                    <input
                        id="bedtime"
                        type="time"
                        name="bedtime"
                        required=true
                        prop:value=move || form.with(|f| f.bedtime.clone())
                        on:change=move |ev| form.update(|f| f.bedtime = event_target_value(&ev))
                    />
                </label>
                <label class="form-label">
                    "Wake-up time"
                    <input
                        id="wake_up_time"
                        type="time"
                        name="wake_up_time"
                        required=true
                        prop:value=move || form.with(|f| f.wake.clone())
                        on:change=move |ev| form.update(|f| f.wake = event_target_value(&ev))
                    />
                </label>
                <label class="form-label">
                    "Sleep goal (hours)"
                    <input
                        id="sleepGoal"
                        type="number"
                        min="1"
                        max="24"
                        step="0.5"
                        prop:value=move || form.with(|f| f.goal.clone())
                        on:input=move |ev| form.update(|f| f.goal = event_target_value(&ev))
                    />
                </label>

                <DurationDisplay form=form/>

                <label class="form-label">
                    "Sleep quality"
                    <input
                        id="sleepQualitySlider"
                        type="range"
                        name="sleep_quality"
                        min=MIN_QUALITY.to_string()
                        max=MAX_QUALITY.to_string()
                        prop:value=move || form.with(|f| f.quality.to_string())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            form.update(|f| f.quality = raw.parse().unwrap_or(f.quality));
                        }
                    />
                </label>
                <QualityIndicator form=form/>

                <label class="form-label">
                    "Minutes to fall asleep"
                    <input
                        type="number"
                        name="sleep_latency"
                        min="0"
                        prop:value=move || form.with(|f| f.latency_minutes.clone())
                        on:input=move |ev| form.update(|f| f.latency_minutes = event_target_value(&ev))
                    />
                </label>
                <label class="form-label">
                    "Minutes awake during the night"
                    <input
                        type="number"
                        name="wake_after_sleep_onset"
                        min="0"
                        prop:value=move || form.with(|f| f.waso_minutes.clone())
                        on:input=move |ev| form.update(|f| f.waso_minutes = event_target_value(&ev))
                    />
                </label>
                <Show when=move || efficiency().is_some()>
                    <p class="sleep-log-page__efficiency">{move || efficiency().unwrap_or_default()}</p>
                </Show>

                <label class="form-label">
                    "Notes"
                    <textarea
                        name="notes"
                        prop:value=move || form.with(|f| f.notes.clone())
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    ></textarea>
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit">"Save"</button>
            </form>
        </div>
    }
}
