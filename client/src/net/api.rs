//! REST API helpers for communicating with the server.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed fetch skips the
//! chart or raises a notification without taking the page down.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::SleepData;

pub const SLEEP_DATA_ENDPOINT: &str = "/api/sleep_data";

#[cfg(any(test, feature = "csr"))]
fn complete_recommendation_endpoint(id: i64) -> String {
    format!("/complete_recommendation/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn sleep_data_failed_message(status: u16) -> String {
    format!("sleep data request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn complete_failed_message(status: u16) -> String {
    format!("complete recommendation failed: {status}")
}

/// Fetch chart/export history from `/api/sleep_data`.
///
/// # Errors
///
/// Returns an error string on transport failure, non-OK status, or a body
/// that does not decode.
pub async fn fetch_sleep_data() -> Result<SleepData, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(SLEEP_DATA_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sleep_data_failed_message(resp.status()));
        }
        resp.json::<SleepData>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Mark a recommendation completed via `GET /complete_recommendation/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn complete_recommendation(id: i64) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = complete_recommendation_endpoint(id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(complete_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err("not available outside the browser".to_owned())
    }
}
