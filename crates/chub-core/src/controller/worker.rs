//! Search worker: runs fired triggers one at a time and updates the view.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use crate::catalog::{CatalogClient, CharacterRecord, SearchOptions};
use crate::view::{ListView, ViewPort};

/// What the result container currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub characters: Vec<CharacterRecord>,
    pub searching: bool,
}

pub(super) async fn run_search_loop(
    mut rx: mpsc::UnboundedReceiver<SearchOptions>,
    catalog: CatalogClient,
    view: Arc<dyn ViewPort>,
    state: Arc<Mutex<ViewState>>,
) {
    while let Some(opts) = rx.recv().await {
        let opts = newest(opts, &mut rx);
        execute_search(&opts, &catalog, view.as_ref(), &state).await;
    }
    tracing::debug!("search worker stopped");
}

/// Skips triggers that fired while the previous search was running; only the
/// most recent one is searched.
fn newest(
    mut opts: SearchOptions,
    rx: &mut mpsc::UnboundedReceiver<SearchOptions>,
) -> SearchOptions {
    let mut skipped = 0usize;
    while let Ok(next) = rx.try_recv() {
        opts = next;
        skipped += 1;
    }
    if skipped > 0 {
        tracing::debug!("search worker: dropped {} stale trigger(s)", skipped);
    }
    opts
}

async fn execute_search(
    opts: &SearchOptions,
    catalog: &CatalogClient,
    view: &dyn ViewPort,
    state: &Mutex<ViewState>,
) {
    state.lock().await.searching = true;
    view.set_searching(true);

    let characters = catalog.search(opts).await;

    view.set_searching(false);
    let mut state = state.lock().await;
    state.searching = false;
    if characters.is_empty() {
        view.render(ListView::NoResults);
    } else {
        view.render(ListView::Characters(&characters));
    }
    // Replace wholesale; a failed search leaves an empty list behind.
    state.characters = characters;
}
