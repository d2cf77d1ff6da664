//! Search parameters and sort keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::settings::Settings;

/// Sort orders accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    DownloadCount,
    Rating,
    RatingCount,
    LastActivityAt,
    CreatedAt,
    Name,
    Random,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::DownloadCount,
        SortKey::Rating,
        SortKey::RatingCount,
        SortKey::LastActivityAt,
        SortKey::CreatedAt,
        SortKey::Name,
        SortKey::Random,
    ];

    /// Value sent as the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::DownloadCount => "download_count",
            SortKey::Rating => "rating",
            SortKey::RatingCount => "rating_count",
            SortKey::LastActivityAt => "last_activity_at",
            SortKey::CreatedAt => "created_at",
            SortKey::Name => "name",
            SortKey::Random => "random",
        }
    }

    /// Human label for sort pickers.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::DownloadCount => "Download Count",
            SortKey::Rating => "Rating",
            SortKey::RatingCount => "Rating Count",
            SortKey::LastActivityAt => "Last Activity",
            SortKey::CreatedAt => "Creation Date",
            SortKey::Name => "Name",
            SortKey::Random => "Random",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
        write!(f, "unknown sort key '{}' (expected one of: {})", self.0, known.join(", "))
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// One search request's parameters. `page` and `page_size` are never 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub search_term: Option<String>,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub nsfw: bool,
    pub sort: Option<SortKey>,
    page: u32,
    page_size: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl SearchOptions {
    /// First page with the persisted NSFW flag and page size.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            search_term: None,
            include_tags: Vec::new(),
            exclude_tags: Vec::new(),
            nsfw: settings.nsfw,
            sort: None,
            page: 1,
            page_size: settings.page_size.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_include_tags(mut self, tags: Vec<String>) -> Self {
        self.include_tags = tags;
        self
    }

    pub fn with_exclude_tags(mut self, tags: Vec<String>) -> Self {
        self.exclude_tags = tags;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.set_page(page);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.set_page_size(page_size);
        self
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
    }
}

/// Splits a comma-separated tag field. Blank input and blank segments yield nothing.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
