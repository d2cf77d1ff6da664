//! User input the host forwards to the controller.

use crate::catalog::SortKey;
use crate::view::TagField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Search term typed; searching waits for Enter or the button.
    EditTerm(String),
    /// Enter in the term field.
    ConfirmTerm,
    /// Keystroke in a tag field: refreshes suggestions and triggers a search.
    EditTags { field: TagField, text: String },
    /// Suggestion clicked: completes the trailing segment, no search.
    SelectSuggestion { field: TagField, tag: String },
    SetSort(SortKey),
    SetNsfw(bool),
    /// Raw "results per page" input; persisted immediately.
    SetPageSize(String),
    /// Raw page-number input.
    SetPage(String),
    PageUp,
    PageDown,
    /// The search button.
    Search,
    /// Download button of a list item.
    Download { full_path: String, asset_url: String },
}

/// Where a search trigger came from; decides whether the page resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// Page number entry or pager buttons: keep the page.
    Paging,
    /// Any filter change or explicit search: back to page 1.
    Filter,
}
