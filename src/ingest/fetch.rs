use std::time::Instant;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::config::IngestConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("building HTTP client failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("response body is not a JSON array: {0}")]
    Body(#[source] reqwest::Error),
}

/// Issue the single listing request and strip the leading metadata element.
pub fn try_fetch_listings(config: &IngestConfig) -> Result<Vec<JsonValue>, FetchError> {
    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(FetchError::Client)?;

    let started = Instant::now();
    let resp = client
        .get(&config.url)
        .send()
        .map_err(|source| FetchError::Request {
            url: config.url.clone(),
            source,
        })?;

    let status = resp.status();
    log::debug!(
        "GET {} -> {} in {} ms",
        config.url,
        status,
        started.elapsed().as_millis()
    );
    if !status.is_success() {
        return Err(FetchError::Status {
            url: config.url.clone(),
            status,
        });
    }

    let listings: Vec<JsonValue> = resp.json().map_err(FetchError::Body)?;
    Ok(listings.into_iter().skip(1).collect())
}

/// Fetch job listings, never failing: any error is logged and yields an
/// empty list so the caller can still write its output file.
pub fn fetch_listings(config: &IngestConfig) -> Vec<JsonValue> {
    match try_fetch_listings(config) {
        Ok(listings) => listings,
        Err(e) => {
            log::error!("Error fetching jobs: {e}");
            Vec::new()
        }
    }
}
