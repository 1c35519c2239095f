//! Line-delimited text file storage, one record per line.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// A single text file read and written as an ordered list of lines.
///
/// Saves overwrite in place; there is no temp-file rename, so an interrupted
/// save can truncate the file.
#[derive(Debug, Clone)]
pub struct LineStore {
    path: PathBuf,
}

impl LineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read trimmed, non-blank lines. A missing file reads as empty.
    pub fn load(&self) -> Result<Vec<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", self.path.display()));
            }
        };
        let lines: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        debug!(path = %self.path.display(), count = lines.len(), "store loaded");
        Ok(lines)
    }

    /// Overwrite the file with one line per item.
    pub fn save<S: AsRef<str>>(&self, items: &[S]) -> Result<()> {
        self.save_with(items, |item| item.as_ref().to_string())
    }

    /// Overwrite the file with one line per item, rendered by `project`.
    pub fn save_with<T>(&self, items: &[T], project: impl Fn(&T) -> String) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let mut buf = String::new();
        for item in items {
            buf.push_str(&project(item));
            buf.push('\n');
        }
        debug!(path = %self.path.display(), count = items.len(), "saving store");
        fs::write(&self.path, buf).with_context(|| format!("write {}", self.path.display()))
    }
}
