//! Round model and drink-choice resolution.

use serde::Serialize;

use super::drinks::Drinks;
use super::favourites::Favourites;
use super::person::Person;

/// Menu label for "use this person's stored favourite".
pub const USUAL_OPTION: &str = "Usual";

/// One line of a round: who gets which drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub person: String,
    pub drink: String,
}

/// An ordered batch of drink assignments owned by one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub owner: Person,
    pub assignments: Vec<Assignment>,
}

impl Round {
    pub fn new(owner: Person) -> Self {
        Self {
            owner,
            assignments: Vec::new(),
        }
    }

    /// Append an assignment. Repeated people accumulate rather than overwrite.
    pub fn add(&mut self, person: impl Into<String>, drink: impl Into<String>) {
        self.assignments.push(Assignment {
            person: person.into(),
            drink: drink.into(),
        });
    }
}

/// An entry in the per-person drinks menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrinkChoice {
    Drink(String),
    /// The person's stored favourite, shown as [`USUAL_OPTION`].
    Usual(String),
}

impl DrinkChoice {
    pub fn label(&self) -> &str {
        match self {
            DrinkChoice::Drink(name) => name,
            DrinkChoice::Usual(_) => USUAL_OPTION,
        }
    }

    /// The concrete drink this choice stands for.
    pub fn resolve(&self) -> &str {
        match self {
            DrinkChoice::Drink(name) | DrinkChoice::Usual(name) => name,
        }
    }
}

/// Drinks offered to `name`: every drink, plus a trailing usual option when
/// they have a favourite on file.
pub fn drink_choices(drinks: &Drinks, favourites: &Favourites, name: &str) -> Vec<DrinkChoice> {
    let mut choices: Vec<DrinkChoice> = drinks
        .as_slice()
        .iter()
        .cloned()
        .map(DrinkChoice::Drink)
        .collect();
    if let Some(favourite) = favourites.get(name) {
        choices.push(DrinkChoice::Usual(favourite.to_string()));
    }
    choices
}
