//! Runtime configuration.
//!
//! The database location and password come from the environment. Loading
//! code takes a [`Config`] value rather than reading the environment itself,
//! so tests build one directly.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Where the database lives and how to unlock it.
pub struct Config {
    file_path: PathBuf,
    password: Zeroizing<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("file_path", &self.file_path)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Create a configuration from explicit values.
    pub fn new(file_path: impl Into<PathBuf>, password: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Read `KEEPASS_FILE_PATH` and `KEEPASS_PASSWORD` from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyVar` naming the first variable that is
    /// unset or empty. The file path is checked before the password.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_path = required(&lookup, constants::FILE_PATH_VAR)?;
        let password = Zeroizing::new(required(&lookup, constants::PASSWORD_VAR)?);

        debug!(path = %file_path, "configuration loaded");

        Ok(Self {
            file_path: PathBuf::from(file_path),
            password,
        })
    }

    /// Path to the `.kdbx` file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Master password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::EmptyVar(name).into()),
    }
}
