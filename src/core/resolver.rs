//! Secret ID resolution.
//!
//! A secret ID names groups below the root, then an entry title, then an
//! optional field:
//!
//! ```text
//! group/sub group/Entry title:Field
//! ```
//!
//! Names are compared exactly and case-sensitively. When siblings share a
//! name, the first one in database order is used.

use tracing::debug;

use crate::core::constants::{FIELD_SEPARATOR, GROUP_SEPARATOR};
use crate::core::tree::{Entry, Group, SecretTree};
use crate::error::{LookupError, Result};

/// A parsed secret ID, borrowing from the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretId<'a> {
    /// Group names to descend through, outermost first.
    pub groups: Vec<&'a str>,
    /// Title of the entry in the innermost group.
    pub entry: &'a str,
    /// Field to read instead of `Password`.
    pub field: Option<&'a str>,
}

impl<'a> SecretId<'a> {
    /// Split a secret ID into groups, entry and field.
    ///
    /// The last segment is split on `:`. The first part is the entry title
    /// and the second the field key; anything after a second `:` is ignored.
    pub fn parse(id: &'a str) -> Self {
        let mut groups: Vec<&str> = id.split(GROUP_SEPARATOR).collect();
        // split always yields at least one item
        let last = groups.pop().unwrap_or_default();

        let mut parts = last.split(FIELD_SEPARATOR);
        let entry = parts.next().unwrap_or_default();
        let field = parts.next();

        Self {
            groups,
            entry,
            field,
        }
    }
}

/// Resolve `id` against `tree` and return the secret value.
///
/// A missing field is not an error: the result is `""`. Missing groups and
/// entries are.
///
/// # Errors
///
/// Returns `LookupError::GroupNotFound` for the first group segment with no
/// matching child, or `LookupError::EntryNotFound` if the final group has no
/// entry with the requested title.
pub fn resolve_secret<'t>(tree: &'t SecretTree, id: &str) -> Result<&'t str> {
    let id = SecretId::parse(id);
    debug!(depth = id.groups.len(), field = ?id.field, "resolving secret");

    let mut group = tree.root();
    for name in &id.groups {
        group = find_group(&group.groups, name)?;
    }

    let entry = find_entry(&group.entries, id.entry)?;
    let value = match id.field {
        Some(field) => entry.get(field),
        None => entry.password(),
    };

    Ok(value.unwrap_or_default())
}

/// First group in `groups` named `name`.
///
/// # Errors
///
/// Returns `LookupError::GroupNotFound` if none matches.
pub fn find_group<'g>(groups: &'g [Group], name: &str) -> Result<&'g Group> {
    groups
        .iter()
        .find(|g| g.name == name)
        .ok_or_else(|| LookupError::GroupNotFound(name.to_string()).into())
}

/// First entry in `entries` titled `title`.
///
/// # Errors
///
/// Returns `LookupError::EntryNotFound` if none matches.
pub fn find_entry<'e>(entries: &'e [Entry], title: &str) -> Result<&'e Entry> {
    entries
        .iter()
        .find(|e| e.title() == title)
        .ok_or_else(|| LookupError::EntryNotFound(title.to_string()).into())
}
