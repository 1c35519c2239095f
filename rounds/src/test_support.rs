//! Test-only helpers: a scripted console and temp data directories.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

use crate::io::config::AppConfig;
use crate::io::console::Console;
use crate::io::paths::DataPaths;

/// Console that replays canned input lines and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: String,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts and printed text, in order.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.output.push_str(prompt);
        self.output.push('\n');
        self.inputs
            .pop_front()
            .ok_or_else(|| anyhow!("scripted input exhausted at prompt '{}'", prompt.trim()))
    }

    fn say(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

/// A temporary data directory with helpers for seeding collection files.
pub struct TestData {
    _temp: TempDir,
    pub paths: DataPaths,
}

impl TestData {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let paths = DataPaths::new(temp.path().join("data"));
        Ok(Self {
            _temp: temp,
            paths,
        })
    }

    /// Config pointing at this data directory, with screen clearing off.
    pub fn config(&self) -> AppConfig {
        AppConfig {
            data_dir: self.paths.data_dir.clone(),
            clear_screen: false,
            ..AppConfig::default()
        }
    }

    pub fn seed(&self, people: &[&str], drinks: &[&str], favourites: &[&str]) -> Result<()> {
        fs::create_dir_all(&self.paths.data_dir).context("create data dir")?;
        write_lines(&self.paths.people_path, people)?;
        write_lines(&self.paths.drinks_path, drinks)?;
        write_lines(&self.paths.favourites_path, favourites)
    }

    pub fn read(&self, path: &Path) -> Result<Vec<String>> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}

fn write_lines(path: &Path, lines: &[&str]) -> Result<()> {
    let mut buf = lines.join("\n");
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write {}", path.display()))
}
