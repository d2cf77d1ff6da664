//! `chub search` – one search, printed as a table.

use anyhow::Result;
use chub_core::catalog::{split_tags, CatalogClient, CharacterRecord, SearchOptions, SortKey};
use chub_core::config::ChubConfig;
use chub_core::settings::{SettingsAdapter, TomlSettingsStore};
use std::sync::Arc;

use super::transport;

#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub term: Option<String>,
    pub tags: Option<String>,
    pub exclude_tags: Option<String>,
    pub sort: Option<SortKey>,
    pub page: u32,
    pub page_size: Option<u32>,
    pub nsfw: Option<bool>,
}

impl SearchArgs {
    pub fn to_options(&self, adapter: &SettingsAdapter) -> SearchOptions {
        let settings = adapter.settings();
        let mut opts = SearchOptions::from_settings(&settings)
            .with_include_tags(split_tags(self.tags.as_deref().unwrap_or("")))
            .with_exclude_tags(split_tags(self.exclude_tags.as_deref().unwrap_or("")))
            .with_sort(self.sort.unwrap_or_default())
            .with_nsfw(self.nsfw.unwrap_or(settings.nsfw))
            .with_page(self.page);
        if let Some(term) = self.term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            opts = opts.with_search_term(term);
        }
        opts
    }
}

pub async fn run_search(cfg: &ChubConfig, args: SearchArgs) -> Result<()> {
    let mut adapter = SettingsAdapter::load_or_init(Arc::new(TomlSettingsStore::open_default()?))?;
    if let Some(n) = args.page_size {
        adapter.set_page_size(n)?;
    }
    let opts = args.to_options(&adapter);

    let catalog = CatalogClient::from_config(transport(cfg), cfg);
    let characters = catalog.search(&opts).await;
    print_characters(&characters, opts.page());
    Ok(())
}

pub(crate) fn print_characters(characters: &[CharacterRecord], page: u32) {
    if characters.is_empty() {
        println!("{}", chub_core::render::NO_RESULTS_TEXT);
        return;
    }
    println!("page {}", page);
    println!("{:<4} {:<28} {:<20} {}", "#", "NAME", "AUTHOR", "TAGS");
    for (i, c) in characters.iter().enumerate() {
        println!(
            "{:<4} {:<28} {:<20} {}",
            i,
            truncate(&c.name, 28),
            truncate(c.author(), 20),
            c.tags.join(", ")
        );
        println!("     {}", truncate(&c.description, 100));
        println!("     {}  {}", c.full_path, c.asset_url);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
