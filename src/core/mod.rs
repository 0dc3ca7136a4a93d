//! Core library components.
//!
//! Loading a database and resolving secret IDs against it. Nothing here
//! prints; the CLI layer owns stdout and stderr.

pub mod config;
pub mod constants;
pub mod loader;
pub mod resolver;
pub mod secrets;
pub mod tree;
