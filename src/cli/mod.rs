//! This module defines the command-line interface structure and handlers.

pub mod commands;

// Command handlers
pub mod collection;
pub mod list;

// Re-export the dispatcher and the parsed argument types
pub use commands::{handle_command, normalize_args, parse_cli_args, run, CliArgs, Commands, USAGE};

// Re-export the Args structs for use in the main binary
pub use collection::{handle_create, handle_recreate, CollectionArgs};
pub use list::{handle_list, ListArgs};
