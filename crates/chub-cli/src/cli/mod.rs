//! CLI for chub-search.

mod commands;
mod repl;
mod terminal_view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use chub_core::catalog::SortKey;
use chub_core::config;
use std::path::PathBuf;

use commands::{run_browse, run_download, run_search, run_tags, SearchArgs};

/// Top-level CLI for chub-search.
#[derive(Debug, Parser)]
#[command(name = "chub")]
#[command(about = "Search the CHub character catalog and download character cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run one search and print the results.
    Search {
        /// Free-text search term.
        term: Option<String>,
        /// Tags every result must have (comma separated).
        #[arg(long, value_name = "TAGS")]
        tags: Option<String>,
        /// Tags no result may have (comma separated).
        #[arg(long, value_name = "TAGS")]
        exclude_tags: Option<String>,
        /// Sort order: download_count, rating, rating_count, last_activity_at, created_at, name, random.
        #[arg(long, value_name = "KEY")]
        sort: Option<SortKey>,
        /// Page number (1-based).
        #[arg(long, default_value = "1", value_name = "N")]
        page: u32,
        /// Results per page; remembered for later searches.
        #[arg(long, value_name = "N")]
        page_size: Option<u32>,
        /// Include NSFW results: true or false (defaults to the saved setting).
        #[arg(long, value_name = "BOOL")]
        nsfw: Option<bool>,
    },

    /// Print tag suggestions for a (possibly comma-separated) prefix.
    Tags {
        /// Tag field text; only the part after the last comma is completed.
        prefix: Option<String>,
    },

    /// Download a character card by its full path and card URL.
    Download {
        /// Character path, `<author>/<slug>`.
        full_path: String,
        /// Card image URL (as printed by `chub search`).
        asset_url: String,
        /// Directory to save into (defaults to config `download_dir`, then the current dir).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Interactive search session.
    Browse {
        /// Directory downloaded cards are saved into.
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Search {
                term,
                tags,
                exclude_tags,
                sort,
                page,
                page_size,
                nsfw,
            } => {
                let args = SearchArgs {
                    term,
                    tags,
                    exclude_tags,
                    sort,
                    page,
                    page_size,
                    nsfw,
                };
                run_search(&cfg, args).await?
            }
            CliCommand::Tags { prefix } => run_tags(&cfg, prefix.as_deref().unwrap_or("")).await?,
            CliCommand::Download {
                full_path,
                asset_url,
                dir,
            } => run_download(&cfg, &full_path, &asset_url, dir).await?,
            CliCommand::Browse { dir } => run_browse(&cfg, dir).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
