//! Constants used throughout keepass-secret.

/// Environment variable holding the path to the `.kdbx` file.
pub const FILE_PATH_VAR: &str = "KEEPASS_FILE_PATH";

/// Environment variable holding the database master password.
pub const PASSWORD_VAR: &str = "KEEPASS_PASSWORD";

/// Environment variable holding a tracing filter directive.
pub const LOG_VAR: &str = "KEEPASS_SECRET_LOG";

/// Separator between group names in a secret ID.
pub const GROUP_SEPARATOR: char = '/';

/// Separator between an entry title and a field key.
pub const FIELD_SEPARATOR: char = ':';

/// Field returned when a secret ID names no field.
pub const PASSWORD_FIELD: &str = "Password";

/// Field holding an entry's title.
pub const TITLE_FIELD: &str = "Title";

/// Printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
