//! Command-line interface module.
//!
//! CLI structure and command handlers for the ghostwriter binary.

mod commands;
mod migrate;
mod serve;

pub use commands::{Cli, Commands};
pub use migrate::handle_migrate_command;
pub use serve::handle_serve_command;
