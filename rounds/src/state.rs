//! In-memory application state shared by every menu handler.

use crate::core::drinks::Drinks;
use crate::core::favourites::Favourites;
use crate::core::person::{NameError, Person, next_id};

/// The three collections, loaded once and passed explicitly to handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub people: Vec<Person>,
    pub drinks: Drinks,
    pub favourites: Favourites,
}

impl AppState {
    /// Add a person from a typed name with the next free id.
    ///
    /// Fails without changing anything when the name is not usable.
    pub fn add_person(&mut self, name: &str) -> Result<&Person, NameError> {
        let person = Person::from_full_name(next_id(&self.people), name)?;
        let index = self.people.len();
        self.people.push(person);
        Ok(&self.people[index])
    }

    pub fn add_drink(&mut self, name: &str) -> bool {
        self.drinks.add(name)
    }

    /// Record `drink` as the favourite of `person`, replacing any previous one.
    pub fn set_favourite(&mut self, person: &Person, drink: &str) {
        self.favourites.set(person.full_name(), drink);
    }

    pub fn people_names(&self) -> Vec<String> {
        self.people.iter().map(Person::full_name).collect()
    }
}
