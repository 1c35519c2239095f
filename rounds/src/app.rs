//! Top-level application context: console, state, storage and templates.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::io::config::AppConfig;
use crate::io::console::Console;
use crate::io::data_store::{Collection, DataStore};
use crate::io::paths::DataPaths;
use crate::render::Renderer;
use crate::state::AppState;

/// Everything a menu handler needs, owned in one place.
pub struct App<C> {
    pub console: C,
    pub state: AppState,
    pub config: AppConfig,
    pub(crate) store: DataStore,
    pub(crate) renderer: Renderer,
}

impl<C: Console> App<C> {
    /// Load state from the configured data directory.
    ///
    /// Records dropped during load are reported on the console.
    pub fn open(config: AppConfig, mut console: C) -> Result<Self> {
        config.validate()?;
        let paths = DataPaths::new(&config.data_dir);
        debug!(data_dir = %paths.data_dir.display(), "opening data");
        let store = DataStore::new(&paths);
        let report = store
            .load()
            .with_context(|| format!("load data from {}", paths.data_dir.display()))?;
        for diagnostic in &report.diagnostics {
            console.say(diagnostic);
        }
        let renderer = Renderer::new().context("build templates")?;
        Ok(Self {
            console,
            state: report.state,
            config,
            store,
            renderer,
        })
    }

    /// Write every collection.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.state)
    }

    /// Persist `collection` right away when `save_on_change` is configured.
    pub fn changed(&self, collection: Collection) -> Result<()> {
        if !self.config.save_on_change {
            return Ok(());
        }
        debug!(?collection, "saving on change");
        self.store
            .save_collection(&self.state, collection)
            .inspect_err(|err| warn!(%err, ?collection, "save on change failed"))
    }
}
