//! Markup for the result list, the empty-result placeholder and the tag
//! autocomplete dropdown.

use std::fmt::Write;

use crate::catalog::CharacterRecord;
use crate::view::TagField;

pub const NO_RESULTS_TEXT: &str = "No characters found";

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One list entry. `index` is positional only.
pub fn list_item_markup(character: &CharacterRecord, index: usize, site_url: &str) -> String {
    let mut tags = String::new();
    for tag in &character.tags {
        let _ = write!(tags, r#"<span class="tag">{}</span>"#, escape_html(tag));
    }
    format!(
        r#"<div class="character-list-item" data-index="{index}">
    <img class="thumbnail" src="{thumb}">
    <div class="info">
        <a href="{detail}" target="_blank">
            <div class="name">{name}</div>
        </a>
        <span class="author">by {author}</span>
        <div class="description">{description}</div>
        <div class="tags">{tags}</div>
    </div>
    <div class="menu_button download-btn" data-card-url="{card}" data-path="{path}"></div>
</div>
"#,
        index = index,
        thumb = escape_html(&character.thumbnail_url),
        detail = escape_html(&character.detail_url(site_url)),
        name = escape_html(&character.name),
        author = escape_html(character.author()),
        description = escape_html(&character.description),
        tags = tags,
        card = escape_html(&character.asset_url),
        path = escape_html(&character.full_path),
    )
}

pub fn list_markup(characters: &[CharacterRecord], site_url: &str) -> String {
    characters
        .iter()
        .enumerate()
        .map(|(i, c)| list_item_markup(c, i, site_url))
        .collect()
}

pub fn no_results_markup() -> String {
    format!(r#"<div class="no-characters-found">{}</div>"#, NO_RESULTS_TEXT)
}

/// Dropdown under a tag field; empty when there is nothing to suggest.
pub fn suggestions_markup(field: TagField, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let mut out = format!(
        r#"<div id="{}-autocomplete" class="autocomplete-dropdown">"#,
        field.element_id()
    );
    for tag in suggestions {
        let _ = write!(
            out,
            r#"<div class="autocomplete-option">{}</div>"#,
            escape_html(tag)
        );
    }
    out.push_str("</div>");
    out
}
