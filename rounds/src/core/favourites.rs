//! Favourite drink per person, keyed by full name.

use indexmap::IndexMap;

use super::drinks::Drinks;
use super::person::{FAVOURITE_SEPARATOR, Person};

/// Stored favourites in the order they were first assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favourites {
    entries: IndexMap<String, String>,
}

/// Favourites parsed from storage plus one diagnostic per rejected reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedFavourites {
    pub favourites: Favourites,
    pub diagnostics: Vec<String>,
}

impl Favourites {
    /// Assign `drink` to `name`, replacing any previous favourite.
    pub fn set(&mut self, name: impl Into<String>, drink: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), drink.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Storage form: `name:drink` per entry.
    pub fn to_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(name, drink)| format!("{}{}{}", name, FAVOURITE_SEPARATOR, drink))
            .collect()
    }

    /// Display form: `name: drink` per entry.
    pub fn display_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(name, drink)| format!("{}: {}", name, drink))
            .collect()
    }
}

/// Parse stored `name:drink` lines, splitting on the first colon only.
///
/// Entries naming an unknown person or drink are dropped; each unknown
/// reference yields its own diagnostic so a line can report both.
pub fn parse_favourites(lines: &[String], people: &[Person], drinks: &Drinks) -> LoadedFavourites {
    let names: Vec<String> = people.iter().map(Person::full_name).collect();
    let mut loaded = LoadedFavourites::default();

    for line in lines {
        let Some((name, drink)) = line.split_once(FAVOURITE_SEPARATOR) else {
            loaded
                .diagnostics
                .push(format!("'{}' is not a name:drink pair", line));
            continue;
        };

        let mut valid = true;
        if !names.iter().any(|n| n == name) {
            valid = false;
            loaded
                .diagnostics
                .push(format!("{} is not a known person", name));
        }
        if !drinks.contains(drink) {
            valid = false;
            loaded
                .diagnostics
                .push(format!("{} is not a known drink", drink));
        }
        if valid {
            loaded.favourites.set(name, drink);
        }
    }

    loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Person> {
        vec![
            Person::new(1, "Alice", None),
            Person::new(2, "Bob", Some("Stone".to_string())),
        ]
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unknown_drink_is_dropped_and_valid_entries_load() {
        let drinks = Drinks::from_names(["Tea", "Coffee"]);
        let loaded = parse_favourites(
            &lines(&["Alice:Tea", "Bob Stone:Mead"]),
            &people(),
            &drinks,
        );

        assert_eq!(loaded.favourites.len(), 1);
        assert_eq!(loaded.favourites.get("Alice"), Some("Tea"));
        assert_eq!(loaded.favourites.get("Bob Stone"), None);
        assert_eq!(loaded.diagnostics, vec!["Mead is not a known drink"]);
    }

    #[test]
    fn unknown_person_and_drink_both_reported() {
        let drinks = Drinks::from_names(["Tea"]);
        let loaded = parse_favourites(&lines(&["Zed:Gin"]), &people(), &drinks);

        assert!(loaded.favourites.is_empty());
        assert_eq!(loaded.diagnostics.len(), 2);
        assert!(loaded.diagnostics[0].contains("Zed is not a known person"));
        assert!(loaded.diagnostics[1].contains("Gin is not a known drink"));
    }

    #[test]
    fn splits_on_first_colon_only() {
        let drinks = Drinks::from_names(["Tea: Earl Grey"]);
        let loaded = parse_favourites(&lines(&["Alice:Tea: Earl Grey"]), &people(), &drinks);
        assert_eq!(loaded.favourites.get("Alice"), Some("Tea: Earl Grey"));
    }

    #[test]
    fn line_without_colon_is_reported() {
        let loaded = parse_favourites(&lines(&["Alice"]), &people(), &Drinks::default());
        assert!(loaded.favourites.is_empty());
        assert_eq!(loaded.diagnostics.len(), 1);
    }

    #[test]
    fn lines_reparse_to_equal_mapping() {
        let drinks = Drinks::from_names(["Tea", "Coffee"]);
        let mut favourites = Favourites::default();
        favourites.set("Bob Stone", "Coffee");
        favourites.set("Alice", "Tea");

        let loaded = parse_favourites(&favourites.to_lines(), &people(), &drinks);
        assert!(loaded.diagnostics.is_empty());
        assert_eq!(loaded.favourites, favourites);
    }

    #[test]
    fn reassignment_overwrites_in_place() {
        let mut favourites = Favourites::default();
        favourites.set("Alice", "Tea");
        favourites.set("Bob", "Tea");
        let previous = favourites.set("Alice", "Coffee");

        assert_eq!(previous.as_deref(), Some("Tea"));
        assert_eq!(favourites.display_lines(), vec!["Alice: Coffee", "Bob: Tea"]);
    }
}
