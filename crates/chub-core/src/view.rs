//! Host UI seam. The controller talks to the display only through
//! [`ViewPort`] and raises user-facing errors through [`Notifier`]; hosts feed
//! user input back as [`crate::controller::UserAction`]s.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::catalog::CharacterRecord;
use crate::render;

/// The two comma-separated tag filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagField {
    Include,
    Exclude,
}

impl TagField {
    pub fn element_id(self) -> &'static str {
        match self {
            TagField::Include => "includeTags",
            TagField::Exclude => "excludeTags",
        }
    }
}

/// What the result container should show after a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    Characters(&'a [CharacterRecord]),
    NoResults,
}

impl ListView<'_> {
    pub fn markup(&self, site_url: &str) -> String {
        match self {
            ListView::Characters(c) => render::list_markup(c, site_url),
            ListView::NoResults => render::no_results_markup(),
        }
    }
}

pub trait ViewPort: Send + Sync {
    /// Replaces the result container's content.
    fn render(&self, list: ListView<'_>);
    /// Style-only busy flag; triggers keep flowing while it's set.
    fn set_searching(&self, searching: bool);
    /// Reflects the page number the controller settled on.
    fn set_page(&self, page: u32);
    /// Writes a tag field after a suggestion was picked.
    fn set_tag_text(&self, field: TagField, text: &str);
    /// Shows (or, when empty, clears) the autocomplete dropdown of a field.
    fn show_suggestions(&self, field: TagField, suggestions: &[String]);
}

/// User-visible error toast.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, title: &str, message: &str);
}

/// Notifier that only logs; for hosts without a toast surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        tracing::warn!("{}: {}", title, message);
    }
}

/// Snapshot of everything an [`HtmlView`] currently displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlViewState {
    /// innerHTML of the result container.
    pub container: String,
    pub searching: bool,
    pub page: u32,
    pub tag_text: HashMap<TagField, String>,
    pub dropdowns: HashMap<TagField, String>,
    /// Number of `render` calls so far.
    pub renders: usize,
}

/// DOM-less view that keeps the markup a browser host would inject.
#[derive(Debug)]
pub struct HtmlView {
    site_url: String,
    state: Mutex<HtmlViewState>,
}

impl HtmlView {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            state: Mutex::new(HtmlViewState {
                page: 1,
                ..HtmlViewState::default()
            }),
        }
    }

    pub fn snapshot(&self) -> HtmlViewState {
        self.lock().clone()
    }

    pub fn container(&self) -> String {
        self.lock().container.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HtmlViewState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ViewPort for HtmlView {
    fn render(&self, list: ListView<'_>) {
        let markup = list.markup(&self.site_url);
        let mut state = self.lock();
        state.container = markup;
        state.renders += 1;
    }

    fn set_searching(&self, searching: bool) {
        self.lock().searching = searching;
    }

    fn set_page(&self, page: u32) {
        self.lock().page = page;
    }

    fn set_tag_text(&self, field: TagField, text: &str) {
        self.lock().tag_text.insert(field, text.to_string());
    }

    fn show_suggestions(&self, field: TagField, suggestions: &[String]) {
        let markup = render::suggestions_markup(field, suggestions);
        self.lock().dropdowns.insert(field, markup);
    }
}
