//! Error types.
//!
//! Every failure is terminal for the invocation. The top-level [`Error`]
//! displays the wrapped domain message unchanged, since automation may match
//! on the exact text.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for keepass-secret.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The database file could not be opened.
    #[error("open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The database could not be decoded or unlocked.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// A group or entry named in the secret ID does not exist.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Invalid command-line input.
    #[error(transparent)]
    Cli(#[from] CliError),
}

/// Configuration errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is empty")]
    EmptyVar(&'static str),
}

/// Decode and unlock errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Wrong password, or the container is corrupt or not a KDBX file.
    #[error("{0}")]
    Decode(#[from] keepass::error::DatabaseOpenError),

    #[error("protected field '{field}' of entry '{entry}' could not be unlocked")]
    Unlock { entry: String, field: String },
}

/// Path resolution errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("keepass group '{0}' not found")]
    GroupNotFound(String),

    #[error("keepass entry '{0}' not found")]
    EntryNotFound(String),
}

/// Command-line input errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("secret ID is empty")]
    EmptySecretId,
}

pub type Result<T> = std::result::Result<T, Error>;
