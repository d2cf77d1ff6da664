//! Card download and handoff to the host's import pipeline.
//!
//! The card image is fetched whole, wrapped in an [`AssetFile`] named after the
//! character's full path, and passed to an [`Importer`]. Failures are logged
//! and shown to the user through the [`Notifier`]; nothing is retried.

mod error;
mod importer;
mod sanitize;

pub use error::DownloadError;
pub use importer::{AssetFile, DirectoryImporter, Importer};
pub use sanitize::{sanitize_file_name, DEFAULT_ASSET_NAME};

use std::sync::Arc;

use crate::catalog::asset_file_name;
use crate::http::{self, HttpTransport};
use crate::view::Notifier;

/// Toast title for every failed download.
pub const DOWNLOAD_FAILED_TITLE: &str = "Character download failed";

/// Content type assumed when the server doesn't send one.
const DEFAULT_CONTENT_TYPE: &str = "image/png";

#[derive(Clone)]
pub struct AssetDownloader {
    transport: Arc<dyn HttpTransport>,
    importer: Arc<dyn Importer>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for AssetDownloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetDownloader").finish_non_exhaustive()
    }
}

impl AssetDownloader {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        importer: Arc<dyn Importer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            importer,
            notifier,
        }
    }

    /// Downloads and imports one card. Errors are reported, not returned.
    pub async fn download(&self, full_path: &str, asset_url: &str) {
        if let Err(e) = self.try_download(full_path, asset_url).await {
            tracing::error!("download of {} from {} failed: {}", full_path, asset_url, e);
            self.notifier.notify_error(DOWNLOAD_FAILED_TITLE, &e.to_string());
        }
    }

    pub async fn try_download(&self, full_path: &str, asset_url: &str) -> Result<(), DownloadError> {
        let file = self.fetch(full_path, asset_url).await?;
        let name = file.name.clone();
        let size = file.bytes.len();
        let importer = Arc::clone(&self.importer);
        tokio::task::spawn_blocking(move || importer.import(file))
            .await
            .map_err(|e| DownloadError::Import(anyhow::anyhow!("import task failed: {}", e)))?
            .map_err(DownloadError::Import)?;
        tracing::info!("imported {} ({} bytes)", name, size);
        Ok(())
    }

    async fn fetch(&self, full_path: &str, asset_url: &str) -> Result<AssetFile, DownloadError> {
        let url = asset_url.to_string();
        tracing::debug!("card GET {}", url);
        let resp = http::run_blocking(&self.transport, move |t| t.get(&url)).await?;
        if !resp.is_success() {
            return Err(DownloadError::Http(resp.status));
        }
        Ok(AssetFile {
            name: asset_file_name(full_path),
            content_type: resp
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            bytes: resp.body,
        })
    }
}
