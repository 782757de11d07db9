// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query engine over a persisted corpus
//!
//! The contract with any presentation layer: given a query string,
//! return a URL or an absence signal. The corpus may have been produced
//! by a separate build run or process; it is read once and then only
//! queried in memory.

use tracing::info;

use super::scorer::{score_and_pick, Pick};
use crate::corpus::{Corpus, CorpusError, CorpusStore, SiteList};

/// Answers queries against the persisted corpus
pub struct QueryEngine {
    sites: SiteList,
    corpus: Corpus,
}

impl QueryEngine {
    /// Load the corpus from `store` for the given site list
    pub async fn load(sites: SiteList, store: &CorpusStore) -> Result<Self, CorpusError> {
        let corpus = store.load().await?;
        info!(
            "Query engine ready: {} sites, {} corpus entries",
            sites.len(),
            corpus.len()
        );
        Ok(Self { sites, corpus })
    }

    /// Build an engine from in-memory parts (fixtures, tests)
    pub fn from_parts(sites: SiteList, corpus: Corpus) -> Self {
        Self { sites, corpus }
    }

    /// Pick the best site for `query`, if any
    pub fn search(&self, query: &str) -> Option<Pick> {
        score_and_pick(query, &self.corpus, self.sites.as_slice())
    }

    /// The site universe this engine answers over
    pub fn sites(&self) -> &SiteList {
        &self.sites
    }

    /// The loaded corpus
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> QueryEngine {
        let sites = SiteList::from_urls(vec![
            "https://a.example".to_string(),
            "https://b.example".to_string(),
        ]);
        let corpus: Corpus = [
            ("https://a.example".to_string(), "the quick brown fox".to_string()),
            ("https://b.example".to_string(), "lazy dog sleeps".to_string()),
        ]
        .into_iter()
        .collect();

        QueryEngine::from_parts(sites, corpus)
    }

    #[test]
    fn test_search_picks_best_site() {
        let pick = engine().search("lazy dog").unwrap();
        assert_eq!(pick.url, "https://b.example");
        assert_eq!(pick.score, 2);
    }

    #[test]
    fn test_search_empty_query_is_none() {
        assert!(engine().search("").is_none());
    }

    #[test]
    fn test_search_result_is_always_a_listed_site() {
        let engine = engine();
        for query in ["fox", "dog", "nothing matches this", "fox dog"] {
            let pick = engine.search(query).unwrap();
            assert!(engine.sites().as_slice().contains(&pick.url));
        }
    }
}
