//! Load and save the people, drinks and favourites collections.

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::line_store::LineStore;
use super::paths::DataPaths;
use crate::core::drinks::Drinks;
use crate::core::favourites::parse_favourites;
use crate::core::person::Person;
use crate::state::AppState;

/// Which collection changed, for per-mutation saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    People,
    Drinks,
    Favourites,
}

/// Loaded state plus diagnostics for records dropped during load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub state: AppState,
    pub diagnostics: Vec<String>,
}

/// One line store per collection.
#[derive(Debug, Clone)]
pub struct DataStore {
    people: LineStore,
    drinks: LineStore,
    favourites: LineStore,
}

impl DataStore {
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            people: LineStore::new(&paths.people_path),
            drinks: LineStore::new(&paths.drinks_path),
            favourites: LineStore::new(&paths.favourites_path),
        }
    }

    /// Load all collections.
    ///
    /// People take ids from their line position (first line is id 1).
    /// Favourites are validated against the loaded people and drinks.
    pub fn load(&self) -> Result<LoadReport> {
        let people: Vec<Person> = self
            .people
            .load()
            .context("load people")?
            .iter()
            .zip(1u32..)
            .filter_map(|(line, id)| Person::from_full_name(id, line).ok())
            .collect();
        let drinks = Drinks::from_names(self.drinks.load().context("load drinks")?);
        let favourite_lines = self.favourites.load().context("load favourites")?;
        let loaded = parse_favourites(&favourite_lines, &people, &drinks);
        for diagnostic in &loaded.diagnostics {
            warn!(store = %self.favourites.path().display(), "{}", diagnostic);
        }

        info!(
            people = people.len(),
            drinks = drinks.len(),
            favourites = loaded.favourites.len(),
            "data loaded"
        );
        Ok(LoadReport {
            state: AppState {
                people,
                drinks,
                favourites: loaded.favourites,
            },
            diagnostics: loaded.diagnostics,
        })
    }

    /// Write every collection.
    pub fn save(&self, state: &AppState) -> Result<()> {
        self.save_collection(state, Collection::People)?;
        self.save_collection(state, Collection::Drinks)?;
        self.save_collection(state, Collection::Favourites)?;
        info!("data saved");
        Ok(())
    }

    /// Write a single collection.
    pub fn save_collection(&self, state: &AppState, collection: Collection) -> Result<()> {
        match collection {
            Collection::People => self
                .people
                .save_with(&state.people, Person::full_name)
                .context("save people"),
            Collection::Drinks => self
                .drinks
                .save(state.drinks.as_slice())
                .context("save drinks"),
            Collection::Favourites => self
                .favourites
                .save(&state.favourites.to_lines())
                .context("save favourites"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_in(dir: &std::path::Path) -> (DataPaths, DataStore) {
        let paths = DataPaths::new(dir);
        let store = DataStore::new(&paths);
        (paths, store)
    }

    #[test]
    fn load_from_empty_dir_is_empty_state() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (_, store) = store_in(temp.path());

        let report = store.load().expect("load");
        assert_eq!(report.state, AppState::default());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_state() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (_, store) = store_in(temp.path());

        let mut state = AppState::default();
        state.add_person("Alice Smith").expect("alice");
        state.add_person("Bob").expect("bob");
        state.add_drink("Tea");
        state.add_drink("Coffee");
        let bob = state.people[1].clone();
        state.set_favourite(&bob, "Coffee");

        store.save(&state).expect("save");
        let report = store.load().expect("load");
        assert_eq!(report.state, state);
    }

    #[test]
    fn favourite_survives_reload_after_rejected_colon_name() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (_, store) = store_in(temp.path());

        let mut state = AppState::default();
        assert!(state.add_person("Dr:Who").is_err());
        let who = state.add_person("Dr Who").expect("dr who").clone();
        state.add_drink("Tea");
        state.set_favourite(&who, "Tea");

        store.save(&state).expect("save");
        let report = store.load().expect("load");
        assert!(report.diagnostics.is_empty());
        assert_eq!(report.state, state);
        assert_eq!(report.state.favourites.get("Dr Who"), Some("Tea"));
    }

    #[test]
    fn favourites_with_unknown_drink_are_dropped_on_load() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (paths, store) = store_in(temp.path());
        fs::write(&paths.people_path, "Alice\nBob\n").expect("people");
        fs::write(&paths.drinks_path, "Tea\nCoffee\n").expect("drinks");
        fs::write(&paths.favourites_path, "Alice:Tea\nBob:Whisky\n").expect("favourites");

        let report = store.load().expect("load");
        assert_eq!(report.state.favourites.get("Alice"), Some("Tea"));
        assert_eq!(report.state.favourites.get("Bob"), None);
        assert_eq!(report.diagnostics, vec!["Whisky is not a known drink"]);
    }

    #[test]
    fn people_ids_follow_line_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (paths, store) = store_in(temp.path());
        fs::write(&paths.people_path, "Alice\n\nBob Stone\n").expect("people");

        let people = store.load().expect("load").state.people;
        let ids: Vec<u32> = people.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(people[1].full_name(), "Bob Stone");
    }

    #[test]
    fn save_collection_only_touches_that_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (paths, store) = store_in(temp.path());
        let mut state = AppState::default();
        state.add_drink("Tea");

        store
            .save_collection(&state, Collection::Drinks)
            .expect("save drinks");
        assert!(paths.drinks_path.is_file());
        assert!(!paths.people_path.exists());
        assert!(!paths.favourites_path.exists());
    }
}
