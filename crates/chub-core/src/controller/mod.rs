//! Search/pagination controller.
//!
//! Owns the search form, the tag cache and the rendered list for one search
//! session. User actions update the form; search triggers go through a
//! [`Debouncer`] so a burst of edits produces a single request carrying the
//! last trigger's parameters. Fired triggers are executed in order by one
//! worker task, so at most one search is in flight. States are Idle and
//! Searching; a failed search lands back in Idle with the empty rendering.

mod action;
mod debounce;
mod form;
mod worker;

pub use action::{TriggerSource, UserAction};
pub use debounce::Debouncer;
pub use form::{parse_page, SearchForm};
pub use worker::ViewState;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use crate::autocomplete;
use crate::catalog::{CatalogClient, CharacterRecord, SearchOptions, TagCache};
use crate::download::AssetDownloader;
use crate::settings::{parse_page_size, SettingsAdapter};
use crate::view::{ListView, TagField, ViewPort};

/// Collaborators a session is built from.
pub struct SessionParts {
    pub catalog: CatalogClient,
    pub downloader: AssetDownloader,
    pub settings: SettingsAdapter,
    pub view: Arc<dyn ViewPort>,
    pub debounce: Duration,
}

pub struct Controller {
    downloader: AssetDownloader,
    settings: SettingsAdapter,
    view: Arc<dyn ViewPort>,
    form: SearchForm,
    tags: TagCache,
    debouncer: Debouncer<SearchOptions>,
    state: Arc<Mutex<ViewState>>,
    worker: JoinHandle<()>,
    downloads: Vec<JoinHandle<()>>,
}

impl Controller {
    /// Starts a session: renders the (empty) list and loads the tag cache.
    pub async fn open(parts: SessionParts) -> Self {
        let SessionParts {
            catalog,
            downloader,
            settings,
            view,
            debounce,
        } = parts;

        let (tx, rx) = mpsc::unbounded_channel();
        let state = Arc::new(Mutex::new(ViewState::default()));
        let worker = tokio::spawn(worker::run_search_loop(
            rx,
            catalog.clone(),
            Arc::clone(&view),
            Arc::clone(&state),
        ));

        let form = SearchForm::new(&settings.settings());
        view.render(ListView::Characters(&[]));
        view.set_page(form.page());

        let tags = catalog.fetch_tags().await;
        tracing::info!("search session opened ({} tags available)", tags.len());

        Self {
            downloader,
            settings,
            view,
            form,
            tags,
            debouncer: Debouncer::new(debounce, tx),
            state,
            worker,
            downloads: Vec::new(),
        }
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn tags(&self) -> &TagCache {
        &self.tags
    }

    pub fn settings(&self) -> &SettingsAdapter {
        &self.settings
    }

    /// Characters currently rendered.
    pub async fn characters(&self) -> Vec<CharacterRecord> {
        self.state.lock().await.characters.clone()
    }

    pub async fn is_searching(&self) -> bool {
        self.state.lock().await.searching
    }

    /// Applies one user action.
    pub fn handle(&mut self, action: UserAction) {
        tracing::trace!("action: {:?}", action);
        match action {
            UserAction::EditTerm(text) => self.form.term = text,
            UserAction::ConfirmTerm | UserAction::Search => self.trigger(TriggerSource::Filter),
            UserAction::EditTags { field, text } => {
                let suggestions = autocomplete::suggest(&text, &self.tags);
                self.view.show_suggestions(field, &suggestions);
                self.form.suggestions.insert(field, suggestions);
                self.form.set_tag_text(field, text);
                self.trigger(TriggerSource::Filter);
            }
            UserAction::SelectSuggestion { field, tag } => self.select_suggestion(field, &tag),
            UserAction::SetSort(sort) => {
                self.form.sort = sort;
                self.trigger(TriggerSource::Filter);
            }
            UserAction::SetNsfw(nsfw) => {
                self.form.nsfw = nsfw;
                self.trigger(TriggerSource::Filter);
            }
            UserAction::SetPageSize(raw) => {
                let page_size = parse_page_size(&raw);
                self.form.page_size = page_size;
                if let Err(e) = self.settings.set_page_size(page_size) {
                    tracing::warn!("could not persist page size {}: {:#}", page_size, e);
                }
                self.trigger(TriggerSource::Filter);
            }
            UserAction::SetPage(raw) => {
                self.form.set_page(parse_page(&raw));
                self.view.set_page(self.form.page());
                self.trigger(TriggerSource::Paging);
            }
            UserAction::PageUp => {
                self.form.page_up();
                self.view.set_page(self.form.page());
                self.trigger(TriggerSource::Paging);
            }
            UserAction::PageDown => {
                self.form.page_down();
                self.view.set_page(self.form.page());
                self.trigger(TriggerSource::Paging);
            }
            UserAction::Download {
                full_path,
                asset_url,
            } => self.spawn_download(full_path, asset_url),
        }
    }

    fn select_suggestion(&mut self, field: TagField, tag: &str) {
        let text = autocomplete::apply_suggestion(self.form.tag_text(field), tag);
        self.view.set_tag_text(field, &text);
        self.form.set_tag_text(field, text);
        self.form.suggestions.remove(&field);
        self.view.show_suggestions(field, &[]);
    }

    fn trigger(&mut self, source: TriggerSource) {
        if source == TriggerSource::Filter && self.form.page() != 1 {
            self.form.set_page(1);
            self.view.set_page(1);
        }
        self.debouncer.trigger(self.form.to_options());
    }

    fn spawn_download(&mut self, full_path: String, asset_url: String) {
        self.downloads.retain(|h| !h.is_finished());
        let downloader = self.downloader.clone();
        self.downloads.push(tokio::spawn(async move {
            downloader.download(&full_path, &asset_url).await;
        }));
    }

    /// Pumps actions until the sender side closes, then closes the session.
    pub async fn run(mut self, mut actions: mpsc::Receiver<UserAction>) {
        while let Some(action) = actions.recv().await {
            self.handle(action);
        }
        self.close().await;
    }

    /// Ends the session. A trigger still waiting out its delay is dropped; a
    /// search already running finishes and renders; running downloads complete.
    pub async fn close(self) {
        let Controller {
            mut debouncer,
            worker,
            downloads,
            ..
        } = self;
        debouncer.cancel();
        drop(debouncer);
        if let Err(e) = worker.await {
            tracing::warn!("search worker ended abnormally: {}", e);
        }
        for handle in downloads {
            if let Err(e) = handle.await {
                tracing::warn!("download task ended abnormally: {}", e);
            }
        }
        tracing::info!("search session closed");
    }
}
