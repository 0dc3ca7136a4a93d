//! In-memory secret tree.
//!
//! A decoded database is reduced to groups, entries and plaintext field
//! values. Children keep the order they had in the database file, and sibling
//! names may repeat.

use std::collections::BTreeMap;
use std::fmt;

use zeroize::Zeroizing;

use crate::core::constants;

/// A fully unlocked database with a single root group.
#[derive(Debug)]
pub struct SecretTree {
    root: Group,
}

impl SecretTree {
    pub fn new(root: Group) -> Self {
        Self { root }
    }

    /// The group lookups start from.
    pub fn root(&self) -> &Group {
        &self.root
    }
}

/// A named folder of entries and child groups.
#[derive(Debug, Default)]
pub struct Group {
    pub name: String,
    pub groups: Vec<Group>,
    pub entries: Vec<Entry>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a child group.
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Append an entry.
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }
}

/// A single record of key/value fields.
#[derive(Default)]
pub struct Entry {
    fields: BTreeMap<String, Zeroizing<String>>,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("title", &self.title())
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value under the same key.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), Zeroizing::new(value.into()));
    }

    /// Value of `key`, if the entry has that field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|v| v.as_str())
    }

    /// The `Title` field, or `""`.
    pub fn title(&self) -> &str {
        self.get(constants::TITLE_FIELD).unwrap_or_default()
    }

    /// The `Password` field, if present.
    pub fn password(&self) -> Option<&str> {
        self.get(constants::PASSWORD_FIELD)
    }
}
