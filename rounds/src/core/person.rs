//! People known to the application.

use thiserror::Error;

/// Separator between name and drink in the favourites file.
pub const FAVOURITE_SEPARATOR: char = ':';

/// Why a typed name cannot become a person.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("a name is required")]
    Blank,
    #[error("\"{0}\" contains ':', which names cannot use")]
    ContainsSeparator(String),
}

/// A person who can own a round or have a drink ordered for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique, monotonically assigned identifier.
    pub id: u32,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Free-form annotation. Held in memory only, never persisted.
    pub metadata: Option<String>,
}

impl Person {
    pub fn new(id: u32, first_name: impl Into<String>, last_name: Option<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name,
            metadata: None,
        }
    }

    /// Build a person from a typed name, splitting on the first space.
    ///
    /// `"Mary Jane Watson"` becomes first name `Mary`, last name `Jane Watson`.
    /// Blank names are rejected, as are names containing
    /// [`FAVOURITE_SEPARATOR`], since the favourites file could not be
    /// split back into name and drink.
    pub fn from_full_name(id: u32, name: &str) -> Result<Self, NameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NameError::Blank);
        }
        if name.contains(FAVOURITE_SEPARATOR) {
            return Err(NameError::ContainsSeparator(name.to_string()));
        }
        let (first, last) = match name.split_once(' ') {
            Some((first, last)) => (first, Some(last.trim())),
            None => (name, None),
        };
        let last = last.filter(|s| !s.is_empty()).map(str::to_string);
        Ok(Self::new(id, first, last))
    }

    /// First and last name, space-joined when a last name exists.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

/// Next free id: one past the highest id in use, `1` for an empty list.
pub fn next_id(people: &[Person]) -> u32 {
    people.iter().map(|p| p.id).max().unwrap_or(0) + 1
}
