//! Canonical file locations inside the data directory.

use std::path::PathBuf;

/// All collection files for a data directory.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub people_path: PathBuf,
    pub drinks_path: PathBuf,
    pub favourites_path: PathBuf,
}

impl DataPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            data_dir: data_dir.clone(),
            people_path: data_dir.join("people.txt"),
            drinks_path: data_dir.join("drinks.txt"),
            favourites_path: data_dir.join("favourites.txt"),
        }
    }
}
