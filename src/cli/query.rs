// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! `query` command: pick the best site for a free-text query

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

use crate::corpus::{CorpusStore, SiteList};
use crate::query::{query_terms, QueryEngine};
use crate::scrape::{extract_title, HttpFetcher, PageFetcher, ScrapeConfig};

/// Arguments for the query command
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Free-text query
    pub query: String,

    /// Path to the site list, one URL per line
    #[arg(long, default_value = "websites.txt")]
    pub sites: PathBuf,

    /// Path of the corpus document to read
    #[arg(long, default_value = "web_db.txt")]
    pub corpus: PathBuf,

    /// Fetch the winning page and print its title
    #[arg(long)]
    pub fetch_title: bool,
}

/// Score the query against the corpus and print the winner
pub async fn run(args: QueryArgs) -> Result<()> {
    // An empty query is a no-op, not an error
    if query_terms(&args.query).is_empty() {
        return Ok(());
    }

    let sites = SiteList::load(&args.sites).await?;
    let store = CorpusStore::new(&args.corpus);
    let engine = QueryEngine::load(sites, &store).await?;

    match engine.search(&args.query) {
        Some(pick) => {
            println!("{} (score {})", pick.url, pick.score);

            if args.fetch_title {
                let fetcher = HttpFetcher::new(&ScrapeConfig::from_env());
                match fetcher.fetch(&pick.url).await {
                    Ok(html) => {
                        let title = extract_title(&html).unwrap_or_else(|| pick.url.clone());
                        println!("Title: {}", title);
                    }
                    Err(e) => warn!("Could not fetch title for {}: {}", pick.url, e),
                }
            }
        }
        None => println!("No matches found."),
    }

    Ok(())
}
