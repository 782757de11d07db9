// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Term scoring over the corpus

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::Corpus;

/// A picked site with its term-match score
///
/// This is the whole contract with a presentation layer: a URL to
/// render, and the score it won with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    /// Winning site URL
    pub url: String,
    /// Number of query terms found in the site's text
    pub score: u32,
}

/// Split a query into lower-cased whitespace terms
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Score every site in site-list order
///
/// Every site starts at zero, including sites with no corpus entry
/// (absent keys score against empty text). A term scores a site when it
/// is a substring of the site's lower-cased text; this is containment,
/// not token matching, so a term can hit inside a larger word, and
/// duplicate query terms count each time.
pub fn score_sites(terms: &[String], corpus: &Corpus, sites: &[String]) -> Vec<(String, u32)> {
    sites
        .iter()
        .map(|site| {
            let text = corpus
                .get(site)
                .map(|text| text.to_lowercase())
                .unwrap_or_default();
            let score = terms
                .iter()
                .filter(|term| text.contains(term.as_str()))
                .count() as u32;
            (site.clone(), score)
        })
        .collect()
}

/// Pick the best-matching site for a free-text query
///
/// Returns `None` for an empty query (a valid no-op, not an error) and
/// for an empty site list; otherwise always returns a pick, even when
/// the best score is zero. Ties resolve to the first site in site-list
/// order, which keeps the result deterministic for a fixed list.
pub fn score_and_pick(query: &str, corpus: &Corpus, sites: &[String]) -> Option<Pick> {
    let terms = query_terms(query);
    if terms.is_empty() || sites.is_empty() {
        return None;
    }

    let mut best: Option<Pick> = None;
    for (url, score) in score_sites(&terms, corpus, sites) {
        // strict > keeps the first site on ties
        if best.as_ref().map_or(true, |pick| score > pick.score) {
            best = Some(Pick { url, score });
        }
    }

    if let Some(ref pick) = best {
        debug!("Best match for {:?}: {} (score {})", query, pick.url, pick.score);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(entries: &[(&str, &str)]) -> Corpus {
        entries
            .iter()
            .map(|(url, text)| (url.to_string(), text.to_string()))
            .collect()
    }

    fn sites(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|url| url.to_string()).collect()
    }

    #[test]
    fn test_query_terms_lowercases_and_splits() {
        assert_eq!(query_terms("Quick  BROWN\tfox"), vec!["quick", "brown", "fox"]);
        assert!(query_terms("").is_empty());
        assert!(query_terms("   \t  ").is_empty());
    }

    #[test]
    fn test_tie_resolves_to_first_site_in_order() {
        let corpus = corpus(&[
            ("a.example", "the quick brown fox"),
            ("b.example", "lazy dog sleeps"),
        ]);
        let sites = sites(&["a.example", "b.example"]);

        let pick = score_and_pick("fox dog", &corpus, &sites).unwrap();
        assert_eq!(pick.url, "a.example");
        assert_eq!(pick.score, 1);
    }

    #[test]
    fn test_duplicate_terms_count_each_time() {
        let corpus = corpus(&[
            ("a.example", "the quick brown fox"),
            ("b.example", "lazy dog sleeps"),
        ]);
        let sites = sites(&["a.example", "b.example"]);

        let pick = score_and_pick("dog dog", &corpus, &sites).unwrap();
        assert_eq!(pick.url, "b.example");
        assert_eq!(pick.score, 2);
    }

    #[test]
    fn test_empty_query_is_a_no_op() {
        let corpus = corpus(&[("a.example", "text")]);
        let sites = sites(&["a.example"]);

        assert!(score_and_pick("", &corpus, &sites).is_none());
        assert!(score_and_pick("   ", &corpus, &sites).is_none());
    }

    #[test]
    fn test_empty_site_list_never_picks() {
        let corpus = corpus(&[("a.example", "text")]);
        assert!(score_and_pick("text", &corpus, &[]).is_none());
    }

    #[test]
    fn test_zero_scores_still_pick_first_site() {
        let corpus = corpus(&[("a.example", "alpha"), ("b.example", "beta")]);
        let sites = sites(&["a.example", "b.example"]);

        let pick = score_and_pick("zzzz", &corpus, &sites).unwrap();
        assert_eq!(pick.url, "a.example");
        assert_eq!(pick.score, 0);
    }

    #[test]
    fn test_missing_corpus_entry_scores_as_empty_text() {
        let corpus = corpus(&[("b.example", "lazy dog")]);
        let sites = sites(&["a.example", "b.example"]);

        let scores = score_sites(&query_terms("dog"), &corpus, &sites);
        assert_eq!(scores, vec![("a.example".to_string(), 0), ("b.example".to_string(), 1)]);
    }

    #[test]
    fn test_substring_containment_matches_inside_words() {
        let corpus = corpus(&[("a.example", "the quickest route")]);
        let sites = sites(&["a.example"]);

        let pick = score_and_pick("quick", &corpus, &sites).unwrap();
        assert_eq!(pick.score, 1);
    }

    #[test]
    fn test_pick_serialization() {
        let pick = Pick {
            url: "https://a.example".to_string(),
            score: 3,
        };

        let json = serde_json::to_string(&pick).unwrap();
        assert!(json.contains("https://a.example"));

        let back: Pick = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pick);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let corpus = corpus(&[("a.example", "The Quick BROWN Fox")]);
        let sites = sites(&["a.example"]);

        let pick = score_and_pick("QUICK brown", &corpus, &sites).unwrap();
        assert_eq!(pick.score, 2);
    }
}
