//! Terminal diagnostics.
//!
//! stdout carries only the secret, so everything here writes to stderr.
//! Colors are dropped when `NO_COLOR` is set or stderr is not a terminal.

use console::style;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// Print an error message to stderr (red).
///
/// Example: `error: keepass entry 'Bank' not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("error:").red().bold().for_stderr(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}
