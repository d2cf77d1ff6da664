//! Persisted user options (results per page, NSFW) stored under the `chub`
//! namespace of a host-provided settings object.
//!
//! The adapter reads the namespace table, fills any missing keys with
//! defaults (writing them back), and persists page-size changes immediately.

mod store;

pub use store::{MemorySettingsStore, SettingsStore, TomlSettingsStore};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Namespace key of this extension inside the host settings object.
pub const SETTINGS_NAMESPACE: &str = "chub";

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Results requested per search page (`first` query parameter). Always >= 1.
    pub page_size: u32,
    /// Default for the NSFW filter when a session opens.
    pub nsfw: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            nsfw: false,
        }
    }
}

impl Settings {
    fn to_table(self) -> Result<toml::Table> {
        match toml::Value::try_from(self).context("serialize settings")? {
            toml::Value::Table(table) => Ok(table),
            other => anyhow::bail!("settings serialized to a {}", other.type_str()),
        }
    }
}

/// Parses a user-entered page size; anything that isn't a positive integer
/// falls back to the default.
pub fn parse_page_size(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Reads and writes [`Settings`] against a [`SettingsStore`].
#[derive(Clone)]
pub struct SettingsAdapter {
    store: Arc<dyn SettingsStore>,
    current: Settings,
}

impl std::fmt::Debug for SettingsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsAdapter")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl SettingsAdapter {
    /// Loads the namespace, filling defaults for absent keys and replacing
    /// values of the wrong type or out of range. Writes back only when
    /// something was filled in or corrected.
    pub fn load_or_init(store: Arc<dyn SettingsStore>) -> Result<Self> {
        let existing = store.read(SETTINGS_NAMESPACE)?;
        let mut table = existing.clone().unwrap_or_default();

        let page_size = match table.get("page_size") {
            Some(toml::Value::Integer(n)) => u32::try_from(*n).ok().filter(|n| *n >= 1),
            _ => None,
        };
        let nsfw = match table.get("nsfw") {
            Some(toml::Value::Boolean(b)) => Some(*b),
            _ => None,
        };
        for (key, valid) in [("page_size", page_size.is_some()), ("nsfw", nsfw.is_some())] {
            if let (false, Some(bad)) = (valid, table.get(key)) {
                tracing::warn!("stored chub setting {} = {} is invalid, using default", key, bad);
            }
        }

        let defaults = Settings::default();
        let current = Settings {
            page_size: page_size.unwrap_or(defaults.page_size),
            nsfw: nsfw.unwrap_or(defaults.nsfw),
        };
        for (key, value) in current.to_table()? {
            table.insert(key, value);
        }

        if existing.as_ref() != Some(&table) {
            store.write(SETTINGS_NAMESPACE, table)?;
            tracing::debug!("initialized chub settings: {:?}", current);
        }

        Ok(Self { store, current })
    }

    pub fn settings(&self) -> Settings {
        self.current
    }

    /// Updates and persists the page size. The in-memory value changes even if
    /// the write fails.
    pub fn set_page_size(&mut self, page_size: u32) -> Result<()> {
        self.current.page_size = page_size.max(1);
        self.persist()
    }

    pub fn set_nsfw(&mut self, nsfw: bool) -> Result<()> {
        self.current.nsfw = nsfw;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let mut table = self
            .store
            .read(SETTINGS_NAMESPACE)?
            .unwrap_or_default();
        // Keep unknown keys other tools may have put in the namespace.
        for (key, value) in self.current.to_table()? {
            table.insert(key, value);
        }
        self.store.write(SETTINGS_NAMESPACE, table)
    }
}
