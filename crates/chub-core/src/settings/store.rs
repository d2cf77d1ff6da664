//! Host settings backends: a TOML file with one table per namespace, and an
//! in-memory map.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Host-provided settings object, keyed by extension namespace.
pub trait SettingsStore: Send + Sync {
    /// Returns the namespace's table, or None if it was never written.
    fn read(&self, namespace: &str) -> Result<Option<toml::Table>>;
    /// Replaces the namespace's table.
    fn write(&self, namespace: &str, table: toml::Table) -> Result<()>;
}

/// Settings persisted as a TOML document; each namespace is a top-level table.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default XDG location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(crate::config::settings_path()?))
    }

    fn load_document(&self) -> Result<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("read settings {}", self.path.display()))?;
        toml::from_str(&data).with_context(|| format!("parse settings {}", self.path.display()))
    }
}

impl SettingsStore for TomlSettingsStore {
    fn read(&self, namespace: &str) -> Result<Option<toml::Table>> {
        let mut doc = self.load_document()?;
        match doc.remove(namespace) {
            Some(toml::Value::Table(t)) => Ok(Some(t)),
            Some(other) => anyhow::bail!(
                "settings namespace '{}' is a {}, expected a table",
                namespace,
                other.type_str()
            ),
            None => Ok(None),
        }
    }

    fn write(&self, namespace: &str, table: toml::Table) -> Result<()> {
        let mut doc = self.load_document()?;
        doc.insert(namespace.to_string(), toml::Value::Table(table));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = toml::to_string_pretty(&doc)?;
        fs::write(&self.path, data)
            .with_context(|| format!("write settings {}", self.path.display()))?;
        Ok(())
    }
}

/// Settings held in memory for embedding hosts and tests.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    tables: Mutex<BTreeMap<String, toml::Table>>,
}

impl SettingsStore for MemorySettingsStore {
    fn read(&self, namespace: &str) -> Result<Option<toml::Table>> {
        let tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        Ok(tables.get(namespace).cloned())
    }

    fn write(&self, namespace: &str, table: toml::Table) -> Result<()> {
        let mut tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        tables.insert(namespace.to_string(), table);
        Ok(())
    }
}
