//! Import pipeline seam and the directory-backed importer used by the CLI.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::sanitize::sanitize_file_name;

/// A downloaded card, as the host's file-drop import would receive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// `<full_path>.png`; may contain `/`.
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Host import function. Parsing/validating the card is the importer's job.
pub trait Importer: Send + Sync {
    fn import(&self, file: AssetFile) -> Result<()>;
}

/// Writes cards into a directory under a filesystem-safe name.
/// An existing file with the same name is replaced.
#[derive(Debug, Clone)]
pub struct DirectoryImporter {
    dir: PathBuf,
}

impl DirectoryImporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(sanitize_file_name(file_name))
    }
}

impl Importer for DirectoryImporter {
    fn import(&self, file: AssetFile) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create {}", self.dir.display()))?;
        let path = self.target_path(&file.name);
        fs::write(&path, &file.bytes).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("saved {} as {}", file.name, path.display());
        Ok(())
    }
}
