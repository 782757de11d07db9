// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Site list loading

use std::io;
use std::path::Path;

use tracing::debug;

use super::store::CorpusError;

/// The fixed, ordered universe of scrapeable and searchable site URLs
///
/// Loaded once from a plain-text file, one URL per line; surrounding
/// whitespace is trimmed and blank lines are skipped. File order is
/// preserved and drives the scorer's tie-break.
#[derive(Debug, Clone)]
pub struct SiteList {
    sites: Vec<String>,
}

impl SiteList {
    /// Load a site list from `path`, fully, before any fetch begins
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let data = match tokio::fs::read_to_string(path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CorpusError::SiteListNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let sites: Vec<String> = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        debug!("Loaded {} sites from {}", sites.len(), path.display());
        Ok(Self { sites })
    }

    /// Build a site list directly from URLs (fixtures, tests)
    pub fn from_urls(sites: Vec<String>) -> Self {
        Self { sites }
    }

    /// Sites in file order
    pub fn as_slice(&self) -> &[String] {
        &self.sites
    }

    /// Number of sites
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether the list has no sites
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Iterate sites in file order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.sites.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_skips_blank_lines_and_trims() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("websites.txt");
        tokio::fs::write(
            &path,
            "https://a.example\n\n  https://b.example  \n\t\nhttps://c.example\n",
        )
        .await
        .unwrap();

        let sites = SiteList::load(&path).await.unwrap();
        assert_eq!(
            sites.as_slice(),
            &[
                "https://a.example".to_string(),
                "https://b.example".to_string(),
                "https://c.example".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_load_preserves_file_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("websites.txt");
        tokio::fs::write(&path, "https://z.example\nhttps://a.example\n")
            .await
            .unwrap();

        let sites = SiteList::load(&path).await.unwrap();
        assert_eq!(sites.as_slice()[0], "https://z.example");
        assert_eq!(sites.as_slice()[1], "https://a.example");
    }

    #[tokio::test]
    async fn test_load_missing_file_is_distinct_error() {
        let dir = tempdir().unwrap();
        let result = SiteList::load(dir.path().join("missing.txt")).await;
        assert!(matches!(result, Err(CorpusError::SiteListNotFound(_))));
    }

    #[tokio::test]
    async fn test_load_empty_file_yields_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("websites.txt");
        tokio::fs::write(&path, "").await.unwrap();

        let sites = SiteList::load(&path).await.unwrap();
        assert!(sites.is_empty());
        assert_eq!(sites.len(), 0);
    }
}
