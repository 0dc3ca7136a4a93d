//! Database loading.
//!
//! Decoding and decryption of the KDBX container is done by the `keepass`
//! crate. This module opens the file, hands the bytes and password over,
//! and converts the decoded database into a [`SecretTree`] with every
//! protected value unlocked to plaintext.

use std::fs::File;
use std::io::Read;

use keepass::db::{Node, Value};
use keepass::{Database, DatabaseKey};
use tracing::{debug, trace};

use crate::core::config::Config;
use crate::core::tree::{Entry, Group, SecretTree};
use crate::error::{DatabaseError, Error, Result};

/// Open, decrypt and unlock the database described by `config`.
///
/// The file is opened read-only and closed before this function returns.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be opened, `DatabaseError::Decode`
/// if the password is wrong or the file is not a valid database, and
/// `DatabaseError::Unlock` if a protected value cannot be unlocked.
pub fn load_database(config: &Config) -> Result<SecretTree> {
    let path = config.file_path();
    debug!(path = %path.display(), "opening database");

    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_reader(file, config.password())
}

/// Decrypt and unlock a database read from `reader`.
///
/// # Errors
///
/// Same as [`load_database`], minus the file open.
pub fn load_from_reader<R: Read>(mut reader: R, password: &str) -> Result<SecretTree> {
    let key = DatabaseKey::new().with_password(password);
    let db = Database::open(&mut reader, key).map_err(DatabaseError::Decode)?;
    unlock(&db)
}

/// Convert a decoded database into a [`SecretTree`], unlocking every
/// protected field.
///
/// # Errors
///
/// Returns `DatabaseError::Unlock` naming the entry and field of the first
/// value that is not valid UTF-8.
pub fn unlock(db: &Database) -> Result<SecretTree> {
    let root = convert_group(&db.root)?;
    debug!(
        root = %root.name,
        groups = root.groups.len(),
        entries = root.entries.len(),
        "database unlocked"
    );
    Ok(SecretTree::new(root))
}

fn convert_group(source: &keepass::db::Group) -> Result<Group> {
    let mut group = Group::new(source.name.as_str());

    for node in &source.children {
        match node {
            Node::Group(child) => group.groups.push(convert_group(child)?),
            Node::Entry(entry) => group.entries.push(convert_entry(entry)?),
        }
    }

    trace!(
        group = %group.name,
        groups = group.groups.len(),
        entries = group.entries.len(),
        "group converted"
    );
    Ok(group)
}

fn convert_entry(source: &keepass::db::Entry) -> Result<Entry> {
    let mut entry = Entry::new();

    for (key, value) in &source.fields {
        let plain = match value {
            Value::Unprotected(s) => s.clone(),
            Value::Protected(secret) => utf8(secret.unsecure(), source, key)?,
            Value::Bytes(bytes) => utf8(bytes, source, key)?,
        };
        entry.insert(key.as_str(), plain);
    }

    Ok(entry)
}

fn utf8(bytes: &[u8], source: &keepass::db::Entry, key: &str) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|_| {
        DatabaseError::Unlock {
            entry: source.get_title().unwrap_or_default().to_string(),
            field: key.to_string(),
        }
        .into()
    })
}
