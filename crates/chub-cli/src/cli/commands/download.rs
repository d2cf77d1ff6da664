//! `chub download` – fetch one card into a directory.

use anyhow::Result;
use chub_core::config::ChubConfig;
use chub_core::download::{AssetDownloader, DirectoryImporter};
use std::path::PathBuf;
use std::sync::Arc;

use super::{download_dir, transport};
use crate::cli::terminal_view::TerminalNotifier;

pub async fn run_download(
    cfg: &ChubConfig,
    full_path: &str,
    asset_url: &str,
    dir: Option<PathBuf>,
) -> Result<()> {
    let importer = DirectoryImporter::new(download_dir(cfg, dir)?);
    let target = importer.target_path(&chub_core::catalog::asset_file_name(full_path));
    let downloader = AssetDownloader::new(
        transport(cfg),
        Arc::new(importer),
        Arc::new(TerminalNotifier),
    );
    downloader.try_download(full_path, asset_url).await?;
    println!("Saved {}", target.display());
    Ok(())
}
