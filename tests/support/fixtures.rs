//! Test fixtures and constants.

use std::sync::OnceLock;

use keepass::db::{Entry, Group, Node, Value};
use keepass::{Database, DatabaseKey};
use secstr::SecStr;

/// File name of the sample database.
pub const DATABASE_FILE: &str = "Database.kdbx";

/// Master password of the sample database.
pub const DATABASE_PASSWORD: &str = "default123";

fn plain(s: &str) -> Value {
    Value::Unprotected(s.to_string())
}

fn protected(s: &str) -> Value {
    Value::Protected(SecStr::new(s.as_bytes().to_vec()))
}

fn entry(fields: &[(&str, Value)]) -> Entry {
    let mut entry = Entry::new();
    for (key, value) in fields {
        entry.fields.insert(key.to_string(), value.clone());
    }
    entry
}

/// The sample database:
///
/// ```text
/// root group
/// ├── My GMail password   UserName=example@gmail.com  Password=hunter2 (protected)
/// └── sub group
///     └── Another password  UserName=johndough  Password=123456 (protected)
/// ```
pub fn sample_database() -> Database {
    let mut db = Database::new(Default::default());
    db.root.name = "root group".to_string();

    db.root.children.push(Node::Entry(entry(&[
        ("Title", plain("My GMail password")),
        ("UserName", plain("example@gmail.com")),
        ("Password", protected("hunter2")),
    ])));

    let mut sub = Group::new("sub group");
    sub.children.push(Node::Entry(entry(&[
        ("Title", plain("Another password")),
        ("UserName", plain("johndough")),
        ("Password", protected("123456")),
    ])));
    db.root.children.push(Node::Group(sub));

    db
}

/// The sample database encrypted with [`DATABASE_PASSWORD`].
///
/// Key derivation is slow, so the bytes are produced once per test binary.
pub fn sample_database_bytes() -> &'static [u8] {
    static BYTES: OnceLock<Vec<u8>> = OnceLock::new();
    BYTES.get_or_init(|| {
        let mut buf = Vec::new();
        sample_database()
            .save(&mut buf, DatabaseKey::new().with_password(DATABASE_PASSWORD))
            .expect("failed to encode sample database");
        buf
    })
}
