//! Name → id lookup tables (Projects, Services).
//!
//! Keys are case-insensitive; the listing order of the remote store is
//! preserved so the hidden sheets are written reproducibly.

use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    // chiave: nome in minuscolo → (nome originale, id)
    entries: IndexMap<String, (String, u64)>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A duplicate name (after case folding) keeps its
    /// original position and takes the newer id.
    pub fn insert(&mut self, name: &str, id: u64) {
        let key = fold(name);
        if key.is_empty() {
            return;
        }
        self.entries.insert(key, (name.trim().to_string(), id));
    }

    pub fn id_of(&self, name: &str) -> Option<u64> {
        self.resolve(name).map(|(_, id)| id)
    }

    /// Case-insensitive lookup returning the canonical display name and id.
    pub fn resolve(&self, name: &str) -> Option<(&str, u64)> {
        self.entries
            .get(&fold(name))
            .map(|(display, id)| (display.as_str(), *id))
    }

    /// Reverse lookup, used when a remote entry carries an id but no name.
    pub fn name_of(&self, id: u64) -> Option<&str> {
        self.entries
            .values()
            .find(|(_, v)| *v == id)
            .map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.values().map(|(n, id)| (n.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = LookupTable::new();
        for (name, id) in iter {
            table.insert(name.as_ref(), id);
        }
        table
    }
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Both lookup tables, passed explicitly to encode/decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookups {
    pub projects: LookupTable,
    pub services: LookupTable,
}

impl Lookups {
    pub fn new(projects: LookupTable, services: LookupTable) -> Self {
        Self { projects, services }
    }
}
