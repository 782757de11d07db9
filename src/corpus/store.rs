// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Corpus persistence as a flat JSON document

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Mapping from site URL to its extracted page text
///
/// A BTreeMap keeps iteration and serialization order stable, so
/// identical builds produce identical files on disk.
pub type Corpus = BTreeMap<String, String>;

/// Errors around the corpus document and the site list
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Site list file is missing
    #[error("Site list not found: {0}")]
    SiteListNotFound(PathBuf),

    /// Corpus file is missing
    #[error("Corpus not found: {0} (run `build` first)")]
    CorpusNotFound(PathBuf),

    /// Underlying filesystem failure
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Corpus file exists but does not parse
    #[error("Corpus file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

const TEMP_SUFFIX: &str = ".tmp";

/// On-disk corpus document
pub struct CorpusStore {
    path: PathBuf,
}

impl CorpusStore {
    /// Create a store for the document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the corpus document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the corpus, fully replacing any previous version
    ///
    /// Writes a sibling temp file and renames it over the target, so the
    /// document on disk always reflects a completed build and never a
    /// work-in-progress snapshot.
    pub async fn save(&self, corpus: &Corpus) -> Result<(), CorpusError> {
        let data = serde_json::to_string_pretty(corpus)?;

        let mut temp = self.path.as_os_str().to_owned();
        temp.push(TEMP_SUFFIX);
        let temp = PathBuf::from(temp);

        tokio::fs::write(&temp, data).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        info!(
            "Saved {} corpus entries to {}",
            corpus.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Load the persisted corpus
    ///
    /// A missing file is a distinct, fatal error rather than an empty
    /// universe.
    pub async fn load(&self) -> Result<Corpus, CorpusError> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CorpusError::CorpusNotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let corpus: Corpus = serde_json::from_str(&data)?;
        debug!(
            "Loaded {} corpus entries from {}",
            corpus.len(),
            self.path.display()
        );
        Ok(corpus)
    }
}
