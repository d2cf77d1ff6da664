//! `chub browse` – interactive session driving the search controller.

use anyhow::Result;
use chub_core::catalog::CatalogClient;
use chub_core::config::ChubConfig;
use chub_core::controller::{Controller, SessionParts, UserAction};
use chub_core::download::{AssetDownloader, DirectoryImporter};
use chub_core::settings::{SettingsAdapter, TomlSettingsStore};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::{download_dir, transport};
use crate::cli::repl::{parse_line, ReplCommand, HELP};
use crate::cli::terminal_view::{TerminalNotifier, TerminalView};

pub async fn run_browse(cfg: &ChubConfig, dir: Option<PathBuf>) -> Result<()> {
    let transport = transport(cfg);
    let settings = SettingsAdapter::load_or_init(Arc::new(TomlSettingsStore::open_default()?))?;
    let dir = download_dir(cfg, dir)?;
    let view = Arc::new(TerminalView::default());

    let controller = Controller::open(SessionParts {
        catalog: CatalogClient::from_config(Arc::clone(&transport), cfg),
        downloader: AssetDownloader::new(
            transport,
            Arc::new(DirectoryImporter::new(&dir)),
            Arc::new(TerminalNotifier),
        ),
        settings,
        view: view.clone(),
        debounce: cfg.debounce(),
    })
    .await;
    println!(
        "{} tags loaded; cards are saved to {}. Type 'help' for commands.",
        controller.tags().len(),
        dir.display()
    );

    let (tx, rx) = mpsc::channel::<UserAction>(32);
    let session = tokio::spawn(controller.run(rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{:#}", e);
                continue;
            }
        };
        let actions = match command {
            ReplCommand::Actions(actions) => actions,
            ReplCommand::Get(index) => match view.character(index) {
                Some(c) => {
                    println!("downloading {}", c.full_path);
                    vec![UserAction::Download {
                        full_path: c.full_path,
                        asset_url: c.asset_url,
                    }]
                }
                None => {
                    eprintln!("no character #{} in the current list", index);
                    continue;
                }
            },
            ReplCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ReplCommand::Quit => break,
        };
        for action in actions {
            if tx.send(action).await.is_err() {
                anyhow::bail!("search session ended unexpectedly");
            }
        }
    }

    drop(tx);
    session.await?;
    Ok(())
}
