// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the scrape pipeline
//!
//! The header set, timeout and pool size are explicit configuration
//! passed into the builder, so tests can substitute fixtures.

use std::env;

/// Configuration for fetching and scraping sites
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Accept header sent with every request
    pub accept: String,
    /// Accept-Language header sent with every request
    pub accept_language: String,
    /// Referer header sent with every request
    pub referer: String,
    /// Per-request timeout in seconds (default: 15)
    pub timeout_secs: u64,
    /// Maximum parallel fetches, clamped to the site count at build time
    /// (default: 20; too high may get you blocked)
    pub max_concurrent_fetches: usize,
}

impl ScrapeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            user_agent: env::var("SCRAPE_USER_AGENT").unwrap_or(defaults.user_agent),
            accept: env::var("SCRAPE_ACCEPT").unwrap_or(defaults.accept),
            accept_language: env::var("SCRAPE_ACCEPT_LANGUAGE").unwrap_or(defaults.accept_language),
            referer: env::var("SCRAPE_REFERER").unwrap_or(defaults.referer),
            timeout_secs: env::var("SCRAPE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            max_concurrent_fetches: env::var("SCRAPE_MAX_CONCURRENT_FETCHES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_concurrent_fetches),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        if self.max_concurrent_fetches == 0 {
            return Err("max_concurrent_fetches must be at least 1".to_string());
        }
        if self.user_agent.is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/101.0.4951.64 Safari/537.36"
                .to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
            referer: "https://example.com".to_string(),
            timeout_secs: 15,
            max_concurrent_fetches: 20,
        }
    }
}
