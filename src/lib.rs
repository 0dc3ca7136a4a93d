//! keepass-secret - Read one secret out of a KeePass database.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument parsing and command execution
//! │   └── output        # stderr diagnostics
//! └── core/             # Core library components
//!     ├── config        # KEEPASS_FILE_PATH / KEEPASS_PASSWORD
//!     ├── constants     # Environment variable names
//!     ├── loader        # Decode, decrypt and unlock a .kdbx file
//!     ├── tree          # In-memory group/entry tree
//!     ├── resolver      # Secret ID lookup
//!     └── secrets       # Load and resolve in one call
//! ```
//!
//! # Secret IDs
//!
//! A secret ID is a `/`-separated path of group names below the root group,
//! ending in an entry title. The entry title may carry a `:Field` suffix to
//! select a field other than `Password`:
//!
//! ```text
//! My GMail password                   -> Password of a root entry
//! My GMail password:UserName          -> UserName of a root entry
//! sub group/Another password          -> Password of an entry in "sub group"
//! ```

pub mod cli;
pub mod core;
pub mod error;
