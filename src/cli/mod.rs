pub mod build;
pub mod query;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Byte Search CLI
#[derive(Parser, Debug)]
#[command(name = "byte-search")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Scrape a fixed site list and pick the best site for a query", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scrape the site list into the corpus document
    Build(build::BuildArgs),

    /// Pick the best-matching site for a free-text query
    Query(query::QueryArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build(args) => build::run(args).await,
        Commands::Query(args) => query::run(args).await,
    }
}
