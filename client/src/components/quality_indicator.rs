//! Quality slider readout with tier coloring.

use leptos::prelude::*;

use crate::state::sleep_form::SleepForm;
use crate::util::classes::quality_class;

#[component]
pub fn QualityIndicator(form: RwSignal<SleepForm>) -> impl IntoView {
    let class = move || quality_class(form.with(SleepForm::quality_tier));
    let value = move || form.with(|f| f.quality);
    let label = move || form.with(|f| f.quality_tier().as_str());

    view! {
        <div id="qualityIndicator" class=class>
            <span id="qualityValue">{value}</span>
            " / 10 · "
            <span class="quality-indicator__label">{label}</span>
        </div>
    }
}
