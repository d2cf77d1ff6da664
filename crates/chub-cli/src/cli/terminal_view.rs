//! Terminal host: prints what a popup would show.

use std::sync::Mutex;

use chub_core::catalog::CharacterRecord;
use chub_core::view::{ListView, Notifier, TagField, ViewPort};

use super::commands::print_characters;

#[derive(Debug, Default)]
pub struct TerminalView {
    characters: Mutex<Vec<CharacterRecord>>,
    page: Mutex<u32>,
}

impl TerminalView {
    /// Character at a printed list index.
    pub fn character(&self, index: usize) -> Option<CharacterRecord> {
        self.characters
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(index)
            .cloned()
    }

    fn page(&self) -> u32 {
        (*self.page.lock().unwrap_or_else(|e| e.into_inner())).max(1)
    }
}

impl ViewPort for TerminalView {
    fn render(&self, list: ListView<'_>) {
        let characters = match list {
            ListView::Characters(c) => c.to_vec(),
            ListView::NoResults => Vec::new(),
        };
        // The opening render of an empty session prints nothing.
        if characters.is_empty() && matches!(list, ListView::Characters(_)) {
            return;
        }
        print_characters(&characters, self.page());
        *self.characters.lock().unwrap_or_else(|e| e.into_inner()) = characters;
    }

    fn set_searching(&self, searching: bool) {
        if searching {
            println!("searching…");
        }
    }

    fn set_page(&self, page: u32) {
        *self.page.lock().unwrap_or_else(|e| e.into_inner()) = page;
    }

    fn set_tag_text(&self, field: TagField, text: &str) {
        let label = match field {
            TagField::Include => "tags",
            TagField::Exclude => "exclude",
        };
        println!("{}: {}", label, text);
    }

    fn show_suggestions(&self, _field: TagField, suggestions: &[String]) {
        if !suggestions.is_empty() {
            println!("suggestions: {}", suggestions.join("  "));
        }
    }
}

/// Error toasts go to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }
}
