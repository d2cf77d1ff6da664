//! End-to-end: a search session over the real curl transport against a local
//! catalog server, rendering into an `HtmlView`.

mod common;

use std::sync::Arc;
use std::time::Duration;

use chub_core::catalog::CatalogClient;
use chub_core::config::ChubConfig;
use chub_core::controller::{Controller, SessionParts, UserAction};
use chub_core::download::{AssetDownloader, DirectoryImporter};
use chub_core::http::CurlTransport;
use chub_core::settings::{MemorySettingsStore, SettingsAdapter};
use chub_core::view::{HtmlView, LogNotifier, TagField};
use common::catalog_server::CatalogServer;

const TWO_ELVES: &str = r#"{"data": {"nodes": [
    {"id": 101, "name": "Elara", "fullPath": "acme/elara", "tagline": "Forest ranger",
     "topics": ["elf", "ranger"], "avatar_url": "https://cdn.test/elara.webp",
     "max_res_url": "https://cdn.test/elara.png"},
    {"id": 102, "name": "Sylvan", "fullPath": "woods/sylvan",
     "topics": ["elf"], "avatar_url": "", "max_res_url": ""}
]}}"#;

struct Session {
    controller: Controller,
    view: Arc<HtmlView>,
    server: CatalogServer,
    _download_dir: tempfile::TempDir,
}

async fn open_session(server: CatalogServer) -> Session {
    let cfg = ChubConfig {
        search_endpoint: server.search_endpoint(),
        tags_endpoint: server.tags_endpoint(),
        debounce_ms: 50,
        timeout_secs: 5,
        ..ChubConfig::default()
    };
    let transport = Arc::new(CurlTransport::from_config(&cfg));
    let view = Arc::new(HtmlView::new(cfg.site_url.clone()));
    let download_dir = tempfile::tempdir().unwrap();
    let settings = SettingsAdapter::load_or_init(Arc::new(MemorySettingsStore::default())).unwrap();
    let controller = Controller::open(SessionParts {
        catalog: CatalogClient::from_config(transport.clone(), &cfg),
        downloader: AssetDownloader::new(
            transport,
            Arc::new(DirectoryImporter::new(download_dir.path())),
            Arc::new(LogNotifier),
        ),
        settings,
        view: view.clone(),
        debounce: cfg.debounce(),
    })
    .await;
    Session {
        controller,
        view,
        server,
        _download_dir: download_dir,
    }
}

/// Waits until the view has rendered `count` times.
async fn wait_for_renders(view: &HtmlView, count: usize) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
    while view.snapshot().renders < count {
        assert!(tokio::time::Instant::now() < deadline, "timed out waiting for render");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn elf_search_renders_two_items_then_placeholder() {
    let server = CatalogServer::start();
    server.set_tags(200, r#"{"tags": [{"tag": "elf"}, {"tag": "elder"}, {"tag": "orc"}]}"#);
    server.push_search(200, TWO_ELVES);
    server.push_search(200, r#"{"data": {"nodes": []}}"#);

    let mut s = open_session(server).await;
    assert_eq!(s.view.snapshot().renders, 1);
    assert_eq!(s.controller.tags().len(), 3);

    s.controller.handle(UserAction::EditTerm("elf".into()));
    s.controller.handle(UserAction::ConfirmTerm);
    wait_for_renders(&s.view, 2).await;

    let html = s.view.container();
    assert_eq!(html.matches(r#"class="character-list-item""#).count(), 2);
    assert!(html.contains(r#"<div class="name">Elara</div>"#));
    assert!(html.contains("by acme"));
    assert!(html.contains("by woods"));
    assert!(html.contains(r#"<span class="tag">elf</span><span class="tag">ranger</span>"#));
    assert!(html.contains(r#"href="https://chub.ai/characters/acme/elara""#));
    assert!(html.contains("No description"));

    let searches = s.server.search_requests();
    assert_eq!(searches.len(), 1);
    assert_eq!(
        searches[0],
        "GET /search?search=elf&sort=download_count&page=1&first=10&nsfw=false"
    );

    s.controller.handle(UserAction::PageUp);
    wait_for_renders(&s.view, 3).await;
    assert_eq!(
        s.view.container(),
        r#"<div class="no-characters-found">No characters found</div>"#
    );
    assert!(s.server.search_requests()[1].contains("page=2&"));
    assert_eq!(s.view.snapshot().page, 2);

    s.controller.close().await;
}

#[tokio::test]
async fn server_errors_render_placeholder_and_empty_tags() {
    let server = CatalogServer::start();
    server.set_tags(500, "oops");
    server.push_search(503, "busy");

    let mut s = open_session(server).await;
    assert!(s.controller.tags().is_empty());

    s.controller.handle(UserAction::EditTags {
        field: TagField::Include,
        text: "el".into(),
    });
    wait_for_renders(&s.view, 2).await;
    assert!(s.view.container().contains("No characters found"));
    assert!(s.view.snapshot().dropdowns[&TagField::Include].is_empty());
    assert!(!s.view.snapshot().searching);

    s.controller.close().await;
}

#[tokio::test]
async fn rapid_edits_collapse_into_one_request() {
    let server = CatalogServer::start();
    server.push_search(200, TWO_ELVES);

    let mut s = open_session(server).await;
    for text in ["e", "el", "elf", "elf, ra"] {
        s.controller.handle(UserAction::EditTags {
            field: TagField::Include,
            text: text.into(),
        });
    }
    wait_for_renders(&s.view, 2).await;
    tokio::time::sleep(Duration::from_millis(200)).await;

    let searches = s.server.search_requests();
    assert_eq!(searches.len(), 1, "got {:?}", searches);
    assert!(searches[0].starts_with("GET /search?tags=elf%2Cra&"));

    s.controller.close().await;
}
