// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! `build` command: scrape the site list into the corpus document

use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::corpus::{CorpusStore, SiteList};
use crate::scrape::{CorpusBuilder, ScrapeConfig};

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the site list, one URL per line
    #[arg(long, default_value = "websites.txt")]
    pub sites: PathBuf,

    /// Path of the corpus document to write
    #[arg(long, default_value = "web_db.txt")]
    pub output: PathBuf,

    /// Maximum parallel fetches (clamped to the site count)
    #[arg(long, env = "SCRAPE_MAX_CONCURRENT_FETCHES")]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, env = "SCRAPE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

/// Scrape every listed site and persist the corpus
pub async fn run(args: BuildArgs) -> Result<()> {
    let mut config = ScrapeConfig::from_env();
    if let Some(concurrency) = args.concurrency {
        config.max_concurrent_fetches = concurrency;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    config
        .validate()
        .map_err(|reason| anyhow!("Invalid scrape config: {}", reason))?;

    let sites = SiteList::load(&args.sites).await?;
    info!("Building corpus for {} sites", sites.len());

    let builder = CorpusBuilder::new(config);
    let corpus = builder.build(sites.as_slice()).await;

    let store = CorpusStore::new(&args.output);
    store.save(&corpus).await?;

    let populated = corpus.values().filter(|text| !text.is_empty()).count();
    println!(
        "Indexed {} sites ({} with text) -> {}",
        corpus.len(),
        populated,
        args.output.display()
    );

    Ok(())
}
