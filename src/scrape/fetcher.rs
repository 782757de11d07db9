// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP page fetching with a browser-like header set
//!
//! Fetches raw page HTML for the corpus builder. Requests carry a fixed
//! User-Agent/Accept/Referer set to reduce trivial bot blocking, and a
//! per-request timeout. Fetching is behind a trait so the builder can be
//! exercised without a network.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::config::ScrapeConfig;

/// Errors that can occur while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request timed out
    #[error("Timeout fetching {url}")]
    Timeout {
        /// URL that timed out
        url: String,
    },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// URL that was fetched
        url: String,
    },

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("Request failed for {url}: {message}")]
    Request {
        /// URL that was fetched
        url: String,
        /// Error message
        message: String,
    },

    /// URL could not be parsed or uses an unsupported scheme
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Source of page HTML for the corpus builder
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the HTML document at `url`
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP fetcher backed by a shared reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new fetcher from configuration
    pub fn new(config: &ScrapeConfig) -> Self {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&config.accept) {
            headers.insert(ACCEPT, value);
        }
        if let Ok(value) = HeaderValue::from_str(&config.accept_language) {
            headers.insert(ACCEPT_LANGUAGE, value);
        }
        if let Ok(value) = HeaderValue::from_str(&config.referer) {
            headers.insert(REFERER, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Check that a URL parses and uses http/https
    fn check_url(url: &str) -> Result<(), FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !["http", "https"].contains(&parsed.scheme()) {
            return Err(FetchError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme: {}", parsed.scheme()),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        Self::check_url(url)?;

        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Request {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
