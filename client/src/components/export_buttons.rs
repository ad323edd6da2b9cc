//! JSON / CSV export of the sleep history.

use leptos::prelude::*;
use sleeplog::ExportFormat;

use crate::state::ui::{NotificationKind, UiState};

/// Fetches fresh history on click and downloads it in the chosen format.
#[component]
pub fn ExportButtons() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let export = move |format: ExportFormat| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = match crate::net::api::fetch_sleep_data().await {
                Ok(data) => crate::util::export::download(&data, format),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                log::error!("export failed: {e}");
                crate::components::notification_stack::push_notification(ui, "Export failed", NotificationKind::Error);
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (format, ui, NotificationKind::Error);
        }
    };

    view! {
        <div class="export-buttons">
            <button class="btn" on:click=move |_| export(ExportFormat::Json)>"Export JSON"</button>
            <button class="btn" on:click=move |_| export(ExportFormat::Csv)>"Export CSV"</button>
        </div>
    }
}
