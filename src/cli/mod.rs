//! Command-line interface.

pub mod output;

use clap::Parser;
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::secrets;
use crate::error::{CliError, Result};

/// keepass-secret - Read one secret out of a KeePass database.
#[derive(Parser, Debug)]
#[command(
    name = "keepass-secret",
    about = "Read one secret out of a KeePass database",
    disable_version_flag = true,
    after_help = "Environment:\n  \
        KEEPASS_FILE_PATH   Path to the .kdbx database (required)\n  \
        KEEPASS_PASSWORD    Master password (required)\n  \
        KEEPASS_SECRET_LOG  Log filter, e.g. keepass_secret=debug\n\n\
        Examples:\n  \
        keepass-secret 'My GMail password'\n  \
        keepass-secret 'My GMail password:UserName'\n  \
        keepass-secret 'sub group/Another password'"
)]
pub struct Cli {
    /// Secret to read: `group/.../entry[:field]`
    #[arg(value_name = "SECRET_ID")]
    pub secret_id: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'V', long)]
    pub version: bool,
}

/// Look up the requested secret and print it to stdout.
///
/// With `--version`, print the bare version and touch nothing else.
/// Otherwise nothing is printed unless the lookup succeeds.
///
/// # Errors
///
/// Returns `CliError::EmptySecretId` if no secret ID was given, or the first
/// error from configuration, loading or resolution.
pub fn execute(cli: &Cli) -> Result<()> {
    if cli.version {
        println!("{}", constants::VERSION);
        return Ok(());
    }

    let secret_id = match cli.secret_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(CliError::EmptySecretId.into()),
    };
    debug!(secret_id, "looking up secret");

    let config = Config::from_env()?;
    let secret = secrets::find_secret(&config, secret_id)?;

    // Plain output for scripting - no decoration
    println!("{}", secret.as_str());
    Ok(())
}
