//! Remote search nodes and their normalized local form.

use serde::Deserialize;

pub const NO_DESCRIPTION: &str = "No description";
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A catalog entry as the search endpoint returns it. Every field is optional;
/// normalization decides what a missing value means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteNode {
    #[serde(default)]
    pub id: Option<NodeId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "fullPath")]
    pub full_path: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub max_res_url: Option<String>,
}

/// Node ids are numeric today; accept strings too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeId::Number(n) => write!(f, "{}", n),
            NodeId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub data: Option<SearchData>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchData {
    #[serde(default)]
    pub nodes: Option<Vec<RemoteNode>>,
}

/// A search result ready for display and download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    /// `<author>/<slug>`; never empty.
    pub full_path: String,
    pub tags: Vec<String>,
    pub thumbnail_url: String,
    /// Full-resolution card image.
    pub asset_url: String,
}

impl CharacterRecord {
    /// First segment of `full_path`.
    pub fn author(&self) -> &str {
        match self.full_path.split('/').next() {
            Some(a) if !a.is_empty() => a,
            _ => UNKNOWN_AUTHOR,
        }
    }

    /// Public page of this character under `site_url`.
    pub fn detail_url(&self, site_url: &str) -> String {
        format!(
            "{}/characters/{}",
            site_url.trim_end_matches('/'),
            self.full_path
        )
    }

    /// Name of the card file handed to the importer.
    pub fn asset_file_name(&self) -> String {
        asset_file_name(&self.full_path)
    }
}

pub fn asset_file_name(full_path: &str) -> String {
    format!("{}.png", full_path)
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

impl RemoteNode {
    /// Normalizes a node. Returns None when `fullPath` is missing or empty,
    /// since nothing can be linked or downloaded without it.
    pub fn into_record(self) -> Option<CharacterRecord> {
        let full_path = non_empty(self.full_path)?;

        let mut tags: Vec<String> = Vec::new();
        for topic in self.topics.unwrap_or_default() {
            if !topic.is_empty() && !tags.contains(&topic) {
                tags.push(topic);
            }
        }

        Some(CharacterRecord {
            id: self.id.map(|id| id.to_string()).unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: non_empty(self.tagline)
                .or_else(|| non_empty(self.description))
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            full_path,
            tags,
            thumbnail_url: self.avatar_url.unwrap_or_default(),
            asset_url: self.max_res_url.unwrap_or_default(),
        })
    }
}

/// Maps a decoded search body to records, skipping unusable nodes.
pub(crate) fn records_from_response(resp: SearchResponse) -> Vec<CharacterRecord> {
    let nodes = resp.data.and_then(|d| d.nodes).unwrap_or_default();
    let total = nodes.len();
    let records: Vec<CharacterRecord> = nodes
        .into_iter()
        .filter_map(RemoteNode::into_record)
        .collect();
    if records.len() < total {
        tracing::warn!(
            "skipped {} search node(s) without fullPath",
            total - records.len()
        );
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(json: &str) -> RemoteNode {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn description_falls_back_to_placeholder() {
        let r = node(r#"{"id": 1, "name": "Wizard", "fullPath": "acme/wizard"}"#)
            .into_record()
            .unwrap();
        assert_eq!(r.description, NO_DESCRIPTION);
        assert_eq!(r.author(), "acme");
        assert_eq!(r.id, "1");
    }

    #[test]
    fn tagline_wins_over_description() {
        let r = node(
            r#"{"fullPath": "a/b", "tagline": "short", "description": "long text"}"#,
        )
        .into_record()
        .unwrap();
        assert_eq!(r.description, "short");

        let r = node(r#"{"fullPath": "a/b", "tagline": "", "description": "long text"}"#)
            .into_record()
            .unwrap();
        assert_eq!(r.description, "long text");
    }

    #[test]
    fn tags_are_deduplicated_in_order() {
        let r = node(r#"{"fullPath": "a/b", "topics": ["elf", "mage", "elf", ""]}"#)
            .into_record()
            .unwrap();
        assert_eq!(r.tags, vec!["elf", "mage"]);
    }

    #[test]
    fn urls_and_string_ids() {
        let r = node(
            r#"{"id": "abc", "fullPath": "a/b", "avatar_url": "https://x/a.webp", "max_res_url": "https://x/a.png"}"#,
        )
        .into_record()
        .unwrap();
        assert_eq!(r.id, "abc");
        assert_eq!(r.thumbnail_url, "https://x/a.webp");
        assert_eq!(r.asset_url, "https://x/a.png");
        assert_eq!(r.asset_file_name(), "a/b.png");
        assert_eq!(r.detail_url("https://chub.ai/"), "https://chub.ai/characters/a/b");
    }

    #[test]
    fn missing_full_path_is_skipped() {
        assert!(node(r#"{"name": "x"}"#).into_record().is_none());
        assert!(node(r#"{"name": "x", "fullPath": ""}"#).into_record().is_none());
    }

    #[test]
    fn leading_slash_gives_unknown_author() {
        let r = node(r#"{"fullPath": "/orphan"}"#).into_record().unwrap();
        assert_eq!(r.author(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn response_without_nodes_is_empty() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(records_from_response(resp).is_empty());
        let resp: SearchResponse = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(records_from_response(resp).is_empty());
        let resp: SearchResponse =
            serde_json::from_str(r#"{"data": {"nodes": [{"fullPath": "a/b"}, {"name": "c"}]}}"#)
                .unwrap();
        assert_eq!(records_from_response(resp).len(), 1);
    }
}
