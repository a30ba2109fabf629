//! Backend health probe.
//!
//! One-shot reachability check against the backend's ping endpoint, run
//! once when the app starts. The outcome collapses every failure mode
//! (transport error, non-success status, non-JSON body) into
//! [`BackendStatus::Disconnected`]; causes are only recorded in the log.

use crate::domain::BackendStatus;
use crate::traits::{Headers, HttpClient};

/// Path of the backend health endpoint, relative to the base URL.
pub const HEALTH_ENDPOINT: &str = "/api/ping";

/// Build the full health check URL for a backend base URL.
///
/// Tolerates a trailing slash on the base URL.
pub fn health_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), HEALTH_ENDPOINT)
}

/// Probe the backend once and classify the outcome.
///
/// `Connected` requires a 2xx response whose body parses as JSON; the
/// body contents are not otherwise inspected. Everything else is
/// `Disconnected`. No retry, no backoff.
///
/// # Arguments
/// * `client` - HTTP client to probe with
/// * `base_url` - Backend base URL, e.g. `http://localhost:8000`
pub async fn probe_backend<C: HttpClient + ?Sized>(client: &C, base_url: &str) -> BackendStatus {
    let url = health_url(base_url);
    tracing::debug!(url = %url, "probing backend health");

    let response = match client.get(&url, &Headers::new()).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(url = %url, error = %err, "health probe failed");
            return BackendStatus::Disconnected;
        }
    };

    if !response.is_success() {
        tracing::warn!(url = %url, status = response.status, "health probe got error status");
        return BackendStatus::Disconnected;
    }

    match response.json::<serde_json::Value>() {
        Ok(_) => {
            tracing::info!(url = %url, "backend connected");
            BackendStatus::Connected
        }
        Err(err) => {
            tracing::warn!(url = %url, error = %err, "health probe body is not JSON");
            BackendStatus::Disconnected
        }
    }
}
