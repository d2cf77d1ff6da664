//! Tag autocomplete for comma-separated tag fields.
//!
//! Only the segment after the last comma is completed; earlier segments are
//! left untouched.

use crate::catalog::TagCache;

pub const MAX_SUGGESTIONS: usize = 10;

/// The segment currently being typed, trimmed and lowercased.
pub fn current_fragment(input: &str) -> String {
    input
        .rsplit(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Up to [`MAX_SUGGESTIONS`] tags, in cache order, whose lowercase form starts
/// with the current fragment. An empty fragment matches everything.
pub fn suggest(input: &str, cache: &TagCache) -> Vec<String> {
    let fragment = current_fragment(input);
    cache
        .iter()
        .filter(|tag| tag.to_lowercase().starts_with(&fragment))
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

/// Replaces the trailing segment of `input` with `tag`.
///
/// `"foo, ba"` + `"bar"` gives `"foo, bar"`; a single segment gives just the tag.
pub fn apply_suggestion(input: &str, tag: &str) -> String {
    let kept = match input.rfind(',') {
        Some(idx) => &input[..=idx],
        None => "",
    };
    format!("{} {}", kept, tag).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> TagCache {
        TagCache::new(["bar", "baz", "qux"])
    }

    #[test]
    fn suggests_matches_for_last_segment() {
        assert_eq!(suggest("foo, ba", &cache()), vec!["bar", "baz"]);
        assert_eq!(suggest("foo, BA ", &cache()), vec!["bar", "baz"]);
        assert_eq!(suggest("q", &cache()), vec!["qux"]);
        assert!(suggest("foo, zz", &cache()).is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_but_keeps_tag_case() {
        let cache = TagCache::new(["Elf", "elder", "Orc"]);
        assert_eq!(suggest("el", &cache), vec!["Elf", "elder"]);
    }

    #[test]
    fn empty_fragment_returns_first_ten() {
        let cache = TagCache::new((0..25).map(|i| format!("tag{:02}", i)));
        let s = suggest("elf, ", &cache);
        assert_eq!(s.len(), MAX_SUGGESTIONS);
        assert_eq!(s[0], "tag00");
        assert_eq!(s[9], "tag09");
        assert_eq!(suggest("", &cache).len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn caps_at_ten_in_cache_order() {
        let cache = TagCache::new((0..30).map(|i| format!("b{:02}", i)));
        let s = suggest("b", &cache);
        assert_eq!(s.len(), MAX_SUGGESTIONS);
        assert_eq!(s.last().map(String::as_str), Some("b09"));
    }

    #[test]
    fn apply_replaces_only_trailing_segment() {
        assert_eq!(apply_suggestion("foo, ba", "bar"), "foo, bar");
        assert_eq!(apply_suggestion("foo,ba", "bar"), "foo, bar");
        assert_eq!(apply_suggestion("a, b, c", "cat"), "a, b, cat");
        assert_eq!(apply_suggestion("ba", "bar"), "bar");
        assert_eq!(apply_suggestion("", "bar"), "bar");
        assert_eq!(apply_suggestion("foo,", "bar"), "foo, bar");
    }

    #[test]
    fn empty_cache_suggests_nothing() {
        assert!(suggest("ba", &TagCache::default()).is_empty());
    }
}
