//! Recommendation cards shown on the dashboard.
//!
//! Completing a card is two-phase: it first fades (`fading = true`) and is
//! removed once the fade delay has elapsed.

#[cfg(test)]
#[path = "recommendations_test.rs"]
mod recommendations_test;

use crate::net::types::Recommendation;

/// Delay between starting the fade and removing the card.
pub const FADE_OUT_MS: u32 = 300;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendationCard {
    pub recommendation: Recommendation,
    pub fading: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecommendationsState {
    pub cards: Vec<RecommendationCard>,
}

impl RecommendationsState {
    /// Cards ordered by descending priority; completed items are dropped.
    pub fn from_items(items: Vec<Recommendation>) -> Self {
        let mut cards: Vec<RecommendationCard> = items
            .into_iter()
            .filter(|r| !r.is_completed)
            .map(|recommendation| RecommendationCard {
                recommendation,
                fading: false,
            })
            .collect();
        cards.sort_by(|a, b| b.recommendation.priority.cmp(&a.recommendation.priority));
        Self { cards }
    }

    /// Start fading a card. Returns `false` if the id is unknown.
    pub fn begin_fade(&mut self, id: i64) -> bool {
        match self.cards.iter_mut().find(|c| c.recommendation.id == id) {
            Some(card) => {
                card.fading = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.cards.retain(|c| c.recommendation.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
