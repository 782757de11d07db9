// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Corpus construction over the site list
//!
//! Runs one fetch+extract pipeline per site with bounded parallelism and
//! gathers the results through the stream, so no task ever writes shared
//! state directly.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::config::ScrapeConfig;
use super::extractor::extract_text;
use super::fetcher::{HttpFetcher, PageFetcher};
use crate::corpus::Corpus;

/// Builds the URL → text corpus from a site list
pub struct CorpusBuilder {
    fetcher: Arc<dyn PageFetcher>,
    config: ScrapeConfig,
}

impl CorpusBuilder {
    /// Create a builder that fetches over HTTP
    pub fn new(config: ScrapeConfig) -> Self {
        let fetcher = Arc::new(HttpFetcher::new(&config));
        Self { fetcher, config }
    }

    /// Create a builder with an injected page source
    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>, config: ScrapeConfig) -> Self {
        Self { fetcher, config }
    }

    /// Scrape every site in `sites` into a corpus
    ///
    /// One entry per distinct URL regardless of completion order. A
    /// failed fetch is logged and contributes an empty entry; it never
    /// aborts the batch. There are no per-site retries; the next build
    /// run is the retry.
    pub async fn build(&self, sites: &[String]) -> Corpus {
        if sites.is_empty() {
            return Corpus::new();
        }

        let concurrency = self.config.max_concurrent_fetches.min(sites.len());
        debug!("Scraping {} sites with {} workers", sites.len(), concurrency);

        let entries: Vec<(String, String)> = stream::iter(sites.to_vec())
            .map(|url| {
                let fetcher = Arc::clone(&self.fetcher);
                async move {
                    let text = match fetcher.fetch(&url).await {
                        Ok(html) => {
                            debug!("Scraped: {}", url);
                            extract_text(&html)
                        }
                        Err(e) => {
                            warn!("Error scraping {}: {}", url, e);
                            String::new()
                        }
                    };
                    (url, text)
                }
            })
            .buffer_unordered(concurrency)
            .collect()
            .await;

        let corpus: Corpus = entries.into_iter().collect();
        let populated = corpus.values().filter(|text| !text.is_empty()).count();
        info!("Scraped {} sites, {} with text", corpus.len(), populated);

        corpus
    }
}
