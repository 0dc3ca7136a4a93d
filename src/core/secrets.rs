//! Secret lookup.
//!
//! Ties the loader and resolver together: one database load, one lookup.

use tracing::info;
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::core::loader;
use crate::core::resolver;
use crate::error::Result;

/// Load the database described by `config` and resolve `secret_id` in it.
///
/// The decrypted tree is dropped before this returns; only the requested
/// value survives.
///
/// # Errors
///
/// Returns the first error from loading or resolving.
pub fn find_secret(config: &Config, secret_id: &str) -> Result<Zeroizing<String>> {
    let tree = loader::load_database(config)?;
    let secret = resolver::resolve_secret(&tree, secret_id)?;
    info!(secret_id, "secret resolved");
    Ok(Zeroizing::new(secret.to_string()))
}
