//! HTTP client for the sleep tracker endpoints.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue, LOCATION};
use reqwest::redirect::Policy;
use sleeplog::SleepData;

use crate::CliError;

pub const SLEEP_DATA_PATH: &str = "/api/sleep_data";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub session_cookie: Option<String>,
    pub timeout_secs: u64,
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, CliError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = config.session_cookie.as_deref() {
            headers.insert(COOKIE, HeaderValue::from_str(cookie)?);
        }
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(Policy::none())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_sleep_data(&self) -> Result<SleepData, CliError> {
        let url = self.url(SLEEP_DATA_PATH);
        tracing::debug!(%url, "fetching sleep history");
        let response = self.client.get(&url).send().await?;
        check_response(response.status(), location(&response), SLEEP_DATA_PATH, false)?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn complete_recommendation(&self, id: i64) -> Result<(), CliError> {
        let path = complete_recommendation_path(id);
        let response = self.client.get(self.url(&path)).send().await?;
        // Success answers with a redirect back to the dashboard.
        check_response(response.status(), location(&response), &path, true)?;
        tracing::info!(id, "recommendation completed");
        Ok(())
    }
}

pub fn complete_recommendation_path(id: i64) -> String {
    format!("/complete_recommendation/{id}")
}

fn location(response: &reqwest::Response) -> Option<&str> {
    response.headers().get(LOCATION).and_then(|v| v.to_str().ok())
}

/// Map a response status to success or a [`CliError`].
///
/// Redirects are not followed: a redirect to the login page means the session
/// cookie was missing or expired. Other redirects count as success only when
/// `redirect_ok` is set.
pub fn check_response(status: StatusCode, location: Option<&str>, path: &str, redirect_ok: bool) -> Result<(), CliError> {
    if status.is_redirection() {
        if location.is_some_and(is_login_redirect) {
            return Err(CliError::Unauthenticated { path: path.to_owned() });
        }
        if redirect_ok {
            return Ok(());
        }
    }
    if status.is_success() {
        return Ok(());
    }
    Err(CliError::ServerError {
        status: status.as_u16(),
        path: path.to_owned(),
    })
}

fn is_login_redirect(location: &str) -> bool {
    let path = match location.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |i| &rest[i..]),
        None => location,
    };
    path == "/login" || path.starts_with("/login?") || path.starts_with("/login/")
}
