//! The drinks collection: insertion-ordered, deduplicated names.

/// Drink names in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drinks {
    names: Vec<String>,
}

impl Drinks {
    /// Build from stored names, dropping duplicates and keeping first occurrences.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut drinks = Self::default();
        for name in names {
            drinks.add(name.as_ref());
        }
        drinks
    }

    /// Add a drink if not already present. Returns `true` if it was added.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
