//! Dashboard card for a single recommendation.

use leptos::prelude::*;

use crate::state::recommendations::RecommendationCard as CardState;

#[component]
pub fn RecommendationCard(card: CardState, on_complete: Callback<i64>) -> impl IntoView {
    let id = card.recommendation.id;
    let opacity = if card.fading { "0" } else { "1" };
    let kind = card.recommendation.recommendation_type.clone().unwrap_or_default();

    view! {
        <div
            id=format!("rec-{id}")
            class="card recommendation-card"
            style=format!("opacity: {opacity}; transition: opacity 0.3s;")
        >
            <span class="recommendation-card__type">{kind}</span>
            <p class="recommendation-card__message">{card.recommendation.message}</p>
            <button
                class="btn btn--primary"
                disabled=card.fading
                on:click=move |_| on_complete.run(id)
            >
                "Mark complete"
            </button>
        </div>
    }
}
