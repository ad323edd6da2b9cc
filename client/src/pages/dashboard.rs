//! Dashboard page: history chart, export, and recommendations.

use leptos::prelude::*;

use crate::components::export_buttons::ExportButtons;
#[cfg(feature = "csr")]
use crate::components::notification_stack::push_notification;
use crate::components::recommendation_card::RecommendationCard;
use crate::components::sleep_chart::SleepChart;
use crate::state::recommendations::RecommendationsState;
#[cfg(feature = "csr")]
use crate::state::ui::NotificationKind;
use crate::state::ui::UiState;
use crate::util::page_data;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // History resource: fetched once on mount, failure leaves the chart out.
    let history = LocalResource::new(|| async {
        match crate::net::api::fetch_sleep_data().await {
            Ok(data) => Some(data),
            Err(e) => {
                #[cfg(feature = "csr")]
                log::error!("error fetching sleep data: {e}");
                #[cfg(not(feature = "csr"))]
                let _ = e;
                None
            }
        }
    });

    let recommendations = RwSignal::new(RecommendationsState::from_items(page_data::recommendations()));

    let on_complete = Callback::new(move |id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::complete_recommendation(id).await {
                Ok(()) => {
                    recommendations.update(|r| {
                        r.begin_fade(id);
                    });
                    push_notification(ui, "Recommendation completed!", NotificationKind::Success);
                    gloo_timers::future::TimeoutFuture::new(crate::state::recommendations::FADE_OUT_MS).await;
                    let _ = recommendations.try_update(|r| r.remove(id));
                }
                Err(e) => {
                    log::error!("error completing recommendation {id}: {e}");
                    push_notification(ui, "Error completing recommendation", NotificationKind::Error);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, ui, recommendations);
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Sleep Dashboard"</h1>
                <ExportButtons/>
            </header>

            <section class="card">
                <Suspense fallback=move || view! { <p>"Loading sleep data..."</p> }>
                    {move || {
                        history
                            .get()
                            .flatten()
                            .filter(|data| !data.is_empty())
                            .map(|data| view! { <SleepChart data=data/> })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__recommendations">
                <h2>"Recommendations"</h2>
                <Show
                    when=move || !recommendations.with(RecommendationsState::is_empty)
                    fallback=|| view! { <p>"Nothing to work on right now."</p> }
                >
                    {move || {
                        recommendations
                            .get()
                            .cards
                            .into_iter()
                            .map(|card| view! { <RecommendationCard card=card on_complete=on_complete/> })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </section>
        </div>
    }
}
