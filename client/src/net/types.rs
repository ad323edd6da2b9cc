//! Payload types shared with the server.
//!
//! The sleep history payload is [`sleeplog::SleepData`]; this module holds the
//! remaining shapes the client reads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use sleeplog::SleepData;

/// A personalised tip rendered as a dashboard card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i64,
    #[serde(default)]
    pub recommendation_type: Option<String>,
    pub message: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default)]
    pub is_completed: bool,
}

fn default_priority() -> i32 {
    1
}

/// Parse the recommendations JSON embedded in the host page.
///
/// Malformed payloads are logged and yield an empty list.
pub fn parse_recommendations(raw: &str) -> Vec<Recommendation> {
    match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(e) => {
            #[cfg(feature = "csr")]
            log::warn!("ignoring malformed recommendations payload: {e}");
            #[cfg(not(feature = "csr"))]
            let _ = e;
            Vec::new()
        }
    }
}
