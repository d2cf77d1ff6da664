//! `chub tags` – autocomplete against the live tag list.

use anyhow::Result;
use chub_core::autocomplete;
use chub_core::catalog::CatalogClient;
use chub_core::config::ChubConfig;

use super::transport;

pub async fn run_tags(cfg: &ChubConfig, prefix: &str) -> Result<()> {
    let catalog = CatalogClient::from_config(transport(cfg), cfg);
    let cache = catalog.try_fetch_tags().await?;
    let suggestions = autocomplete::suggest(prefix, &cache);
    if suggestions.is_empty() {
        println!("No matching tags.");
    }
    for tag in suggestions {
        println!("{}", tag);
    }
    Ok(())
}
