//! Command helper methods for Test.

use super::{Test, DATABASE_PASSWORD};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a keepass-secret command with an empty environment.
    ///
    /// Only `NO_COLOR` is set; use [`Test::cmd`] for a configured one.
    pub fn bare_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("keepass-secret").expect("failed to find keepass-secret binary");
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Create a keepass-secret command pointed at the sample database.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.env("KEEPASS_FILE_PATH", &self.db_path);
        cmd.env("KEEPASS_PASSWORD", DATABASE_PASSWORD);
        cmd
    }

    /// Shortcut for `keepass-secret <secret_id>`.
    pub fn get(&self, secret_id: &str) -> Output {
        self.cmd()
            .arg(secret_id)
            .output()
            .expect("failed to run keepass-secret")
    }
}
