//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let next = dark_mode::toggle(ui.with_untracked(|s| s.theme));
        ui.update(|s| s.theme = next);
    };

    let label = move || if ui.with(|s| s.theme.is_dark()) { "Light mode" } else { "Dark mode" };

    view! {
        <button class="btn btn--ghost theme-toggle" title="Toggle dark mode" on:click=on_click>
            {label}
        </button>
    }
}
