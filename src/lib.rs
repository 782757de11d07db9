// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod corpus;
pub mod query;
pub mod scrape;
pub mod version;

// Re-export main types from the core modules
pub use corpus::{Corpus, CorpusError, CorpusStore, SiteList};
pub use query::{query_terms, score_and_pick, score_sites, Pick, QueryEngine};
pub use scrape::{
    extract_text, extract_title, CorpusBuilder, FetchError, HttpFetcher, PageFetcher,
    ScrapeConfig, TEXT_TAGS,
};
