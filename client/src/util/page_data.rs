//! Data islands embedded in the host page.
//!
//! The server renders JSON into `<script type="application/json" id="...">`
//! tags; this module reads them back out.

use crate::net::types::{Recommendation, parse_recommendations};

pub const RECOMMENDATIONS_ISLAND_ID: &str = "recommendations-data";

/// Raw text of the island with `id`, if present.
pub fn read_island(id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.text_content())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}

/// Recommendations embedded in the page, or none.
pub fn recommendations() -> Vec<Recommendation> {
    read_island(RECOMMENDATIONS_ISLAND_ID)
        .map(|raw| parse_recommendations(&raw))
        .unwrap_or_default()
}
