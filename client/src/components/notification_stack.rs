//! Transient toast notifications in the top-right corner.

use leptos::prelude::*;

use crate::state::ui::{NotificationKind, UiState};

/// Show a notification and schedule its removal after
/// [`crate::state::ui::NOTIFICATION_TTL_MS`].
pub fn push_notification(ui: RwSignal<UiState>, message: impl Into<String>, kind: NotificationKind) {
    let mut id = 0;
    ui.update(|s| id = s.notify(message, kind));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::ui::NOTIFICATION_TTL_MS).await;
        let _ = ui.try_update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

#[component]
pub fn NotificationStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="notification-stack">
            {move || {
                ui.get()
                    .notifications
                    .into_iter()
                    .map(|n| {
                        let id = n.id;
                        view! {
                            <div class=format!("{} alert-dismissible fade show", n.kind.css_class()) role="alert">
                                {n.message}
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| ui.update(|s| s.dismiss(id))
                                ></button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
