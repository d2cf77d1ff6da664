//! CLI command handlers, one per file.

mod browse;
mod download;
mod search;
mod tags;

pub use browse::run_browse;
pub use download::run_download;
pub use search::{run_search, SearchArgs};
pub(crate) use search::print_characters;
pub use tags::run_tags;

use anyhow::Result;
use chub_core::config::ChubConfig;
use chub_core::http::{CurlTransport, HttpTransport};
use std::path::PathBuf;
use std::sync::Arc;

pub(crate) fn transport(cfg: &ChubConfig) -> Arc<dyn HttpTransport> {
    Arc::new(CurlTransport::from_config(cfg))
}

/// `--dir`, then config `download_dir`, then the current directory.
pub(crate) fn download_dir(cfg: &ChubConfig, dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir.or_else(|| cfg.download_dir.clone()) {
        Some(d) => Ok(d),
        None => Ok(std::env::current_dir()?),
    }
}
