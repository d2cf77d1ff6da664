//! Remote catalog client: tag list and paginated/filtered character search.
//!
//! Both calls fail soft. Transport failures, non-2xx statuses and bodies that
//! don't decode are logged and turn into an empty result so the session keeps
//! working. The `try_*` variants expose the underlying [`CatalogError`].

mod error;
mod options;
mod query;
mod record;
mod tags;

pub use error::{CatalogError, FailureKind};
pub use options::{split_tags, SearchOptions, SortKey, UnknownSortKey};
pub use query::search_url;
pub use record::{
    asset_file_name, CharacterRecord, NodeId, RemoteNode, NO_DESCRIPTION, UNKNOWN_AUTHOR,
};
pub use tags::TagCache;

use std::sync::Arc;

use crate::config::ChubConfig;
use crate::http::{self, HttpTransport};
use record::SearchResponse;
use tags::TagsResponse;

#[derive(Clone)]
pub struct CatalogClient {
    transport: Arc<dyn HttpTransport>,
    search_endpoint: String,
    tags_endpoint: String,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("search_endpoint", &self.search_endpoint)
            .field("tags_endpoint", &self.tags_endpoint)
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        search_endpoint: impl Into<String>,
        tags_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            search_endpoint: search_endpoint.into(),
            tags_endpoint: tags_endpoint.into(),
        }
    }

    pub fn from_config(transport: Arc<dyn HttpTransport>, cfg: &ChubConfig) -> Self {
        Self::new(transport, &cfg.search_endpoint, &cfg.tags_endpoint)
    }

    /// Fetches the tag list; any failure yields an empty cache.
    pub async fn fetch_tags(&self) -> TagCache {
        match self.try_fetch_tags().await {
            Ok(cache) => {
                tracing::debug!("fetched {} tags", cache.len());
                cache
            }
            Err(e) => {
                log_failure("tag fetch", &e);
                TagCache::default()
            }
        }
    }

    pub async fn try_fetch_tags(&self) -> Result<TagCache, CatalogError> {
        let url = self.tags_endpoint.clone();
        let resp = http::run_blocking(&self.transport, move |t| t.post_json(&url, b"{}")).await?;
        if !resp.is_success() {
            return Err(CatalogError::Http(resp.status));
        }
        let body: TagsResponse = serde_json::from_slice(&resp.body)?;
        Ok(TagCache::from_response(body))
    }

    /// Runs one search; failures and empty pages both yield an empty list.
    pub async fn search(&self, opts: &SearchOptions) -> Vec<CharacterRecord> {
        match self.try_search(opts).await {
            Ok(records) => records,
            Err(e) => {
                log_failure("search", &e);
                Vec::new()
            }
        }
    }

    pub async fn try_search(&self, opts: &SearchOptions) -> Result<Vec<CharacterRecord>, CatalogError> {
        let url = search_url(&self.search_endpoint, opts)?.to_string();
        tracing::debug!("search GET {}", url);
        let resp = http::run_blocking(&self.transport, move |t| t.get(&url)).await?;
        if !resp.is_success() {
            return Err(CatalogError::Http(resp.status));
        }
        let body: SearchResponse = serde_json::from_slice(&resp.body)?;
        let records = record::records_from_response(body);
        tracing::debug!(
            "search page {} returned {} character(s)",
            opts.page(),
            records.len()
        );
        Ok(records)
    }
}

fn log_failure(what: &str, e: &CatalogError) {
    match e {
        CatalogError::Transport(t) => {
            tracing::error!("{} failed ({}): {}", what, t.describe(), e)
        }
        _ => tracing::error!("{} failed ({:?}): {}", what, e.kind(), e),
    }
}
