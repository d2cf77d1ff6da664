//! Tag list used for autocomplete.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct TagsResponse {
    pub tags: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagEntry {
    pub tag: String,
}

/// Sorted, de-duplicated tag names. Empty when the tag fetch failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCache {
    tags: Vec<String>,
}

impl TagCache {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        tags.sort();
        tags.dedup();
        Self { tags }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}

impl TagCache {
    pub(crate) fn from_response(resp: TagsResponse) -> Self {
        TagCache::new(resp.tags.into_iter().map(|t| t.tag))
    }
}
