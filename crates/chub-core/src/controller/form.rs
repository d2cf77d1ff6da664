//! Current values of the search controls.

use std::collections::HashMap;

use crate::catalog::{split_tags, SearchOptions, SortKey};
use crate::settings::Settings;
use crate::view::TagField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub term: String,
    pub include_tags: String,
    pub exclude_tags: String,
    pub sort: SortKey,
    pub nsfw: bool,
    page: u32,
    pub page_size: u32,
    /// Dropdown entries currently shown per tag field.
    pub suggestions: HashMap<TagField, Vec<String>>,
}

impl SearchForm {
    pub fn new(settings: &Settings) -> Self {
        Self {
            term: String::new(),
            include_tags: String::new(),
            exclude_tags: String::new(),
            sort: SortKey::default(),
            nsfw: settings.nsfw,
            page: 1,
            page_size: settings.page_size.max(1),
            suggestions: HashMap::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn page_up(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn page_down(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn tag_text(&self, field: TagField) -> &str {
        match field {
            TagField::Include => &self.include_tags,
            TagField::Exclude => &self.exclude_tags,
        }
    }

    pub fn set_tag_text(&mut self, field: TagField, text: String) {
        match field {
            TagField::Include => self.include_tags = text,
            TagField::Exclude => self.exclude_tags = text,
        }
    }

    pub fn to_options(&self) -> SearchOptions {
        let term = self.term.trim();
        let mut opts = SearchOptions::default()
            .with_include_tags(split_tags(&self.include_tags))
            .with_exclude_tags(split_tags(&self.exclude_tags))
            .with_sort(self.sort)
            .with_nsfw(self.nsfw)
            .with_page(self.page)
            .with_page_size(self.page_size);
        if !term.is_empty() {
            opts = opts.with_search_term(term);
        }
        opts
    }
}

/// Page number from raw input; anything unparsable or below 1 becomes 1.
pub fn parse_page(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_options_reflects_controls() {
        let mut form = SearchForm::new(&Settings {
            page_size: 20,
            nsfw: true,
        });
        form.term = "  elf ".into();
        form.include_tags = "fantasy, female".into();
        form.exclude_tags = "".into();
        form.sort = SortKey::Name;
        form.set_page(4);

        let opts = form.to_options();
        assert_eq!(opts.search_term.as_deref(), Some("elf"));
        assert_eq!(opts.include_tags, vec!["fantasy", "female"]);
        assert!(opts.exclude_tags.is_empty());
        assert_eq!(opts.sort, Some(SortKey::Name));
        assert!(opts.nsfw);
        assert_eq!(opts.page(), 4);
        assert_eq!(opts.page_size(), 20);
    }

    #[test]
    fn blank_term_is_none() {
        let form = SearchForm::new(&Settings::default());
        assert!(form.to_options().search_term.is_none());
    }

    #[test]
    fn paging_floors_at_one() {
        let mut form = SearchForm::new(&Settings::default());
        form.page_down();
        assert_eq!(form.page(), 1);
        form.page_up();
        form.page_up();
        assert_eq!(form.page(), 3);
        form.page_down();
        assert_eq!(form.page(), 2);
    }

    #[test]
    fn parse_page_input() {
        assert_eq!(parse_page("7"), 7);
        assert_eq!(parse_page("0"), 1);
        assert_eq!(parse_page("-2"), 1);
        assert_eq!(parse_page("x"), 1);
    }
}
