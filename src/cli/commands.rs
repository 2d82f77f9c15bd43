use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use super::collection::{handle_create, handle_recreate, CollectionArgs};
use super::list::{handle_list, ListArgs};
use crate::config::load_config;
use crate::vector_client::Connect;

/// Printed when the tool is run without a command.
pub const USAGE: &str = "
Usage: collection-admin [command] [options]

Commands:
  create [collection_name] [vector_size] [endpoint_name]  - Create a new collection
  recreate [collection_name] [vector_size] [endpoint_name] - Recreate (drop and create) a collection
  list [endpoint_name]                                    - List all collections

Examples:
  collection-admin create
  collection-admin create my_collection 1536
  collection-admin create my_collection 1536 qdrant_local
  collection-admin recreate my_collection
  collection-admin list
  collection-admin list qdrant_url
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Create, recreate or list collections on a Qdrant endpoint",
    long_about = None,
    allow_external_subcommands = true,
    disable_help_subcommand = true
)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(long, global = true, env = "COLLECTION_ADMIN_CONFIG", value_parser = clap::value_parser!(PathBuf))]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Create a new collection
    Create(CollectionArgs),
    /// Recreate (drop and create) a collection
    Recreate(CollectionArgs),
    /// List all collections
    List(ListArgs),
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Lower-cases the command token so `CREATE` and `create` dispatch the same way.
///
/// The first element is the program name and is left alone, as are `--config`
/// and its value.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut normalized = Vec::new();
    let mut iter = args.into_iter();
    if let Some(program) = iter.next() {
        normalized.push(program);
    }

    let mut skip_value = false;
    let mut found_command = false;
    for arg in iter {
        if found_command {
            normalized.push(arg);
        } else if skip_value {
            skip_value = false;
            normalized.push(arg);
        } else if arg == "--config" {
            skip_value = true;
            normalized.push(arg);
        } else if arg.starts_with('-') {
            normalized.push(arg);
        } else {
            found_command = true;
            normalized.push(arg.to_lowercase());
        }
    }
    normalized
}

/// Parses the process arguments into [`CliArgs`].
///
/// A leading flag that is not one of ours (`--config`, `--help`, `--version`) is taken
/// as the command name, so it is reported as an unknown command instead of rejected.
pub fn parse_cli_args<I>(args: I) -> std::result::Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = String>,
{
    let argv = normalize_args(args);
    match unrecognized_flag_position(&argv) {
        Some(index) => {
            let mut parsed = CliArgs::try_parse_from(&argv[..index])?;
            parsed.command = Some(Commands::Unknown(argv[index..].to_vec()));
            Ok(parsed)
        }
        None => CliArgs::try_parse_from(argv),
    }
}

fn unrecognized_flag_position(argv: &[String]) -> Option<usize> {
    let mut skip_value = false;
    for (index, arg) in argv.iter().enumerate().skip(1) {
        if skip_value {
            skip_value = false;
            continue;
        }
        match arg.as_str() {
            "--config" => skip_value = true,
            "-h" | "--help" | "-V" | "--version" => return None,
            flag if flag.starts_with("--config=") => {}
            flag if flag.starts_with('-') => return Some(index),
            _ => return None,
        }
    }
    None
}

/// Dispatches one command against the endpoints reachable through `connector`.
///
/// Returns `None` when no remote operation ran, otherwise the operation's success flag.
pub async fn handle_command<K, W>(command: &Commands, connector: &K, out: &mut W) -> Option<bool>
where
    K: Connect,
    W: Write,
{
    match command {
        Commands::Create(args) => Some(handle_create(args, connector, out).await),
        Commands::Recreate(args) => Some(handle_recreate(args, connector, out).await),
        Commands::List(args) => Some(handle_list(args, connector, out).await),
        Commands::Unknown(tokens) => {
            report_unknown_command(tokens, out);
            None
        }
    }
}

fn report_unknown_command<W: Write>(tokens: &[String], out: &mut W) {
    let name = tokens.first().map(String::as_str).unwrap_or_default();
    writeln!(out, "Unknown command: {name}").ok();
}

/// Runs a parsed invocation: prints usage, rejects unknown commands, or loads the
/// configuration and dispatches.
///
/// Only configuration loading can fail here; operation failures are reported through
/// the returned flag.
pub async fn run<W: Write>(args: CliArgs, out: &mut W) -> Result<Option<bool>> {
    let command = match args.command {
        None => {
            writeln!(out, "{USAGE}").context("Failed to write usage")?;
            return Ok(None);
        }
        Some(Commands::Unknown(tokens)) => {
            report_unknown_command(&tokens, out);
            return Ok(None);
        }
        Some(command) => command,
    };

    let config = load_config(args.config.as_ref()).context("Failed to load configuration")?;
    log::debug!("Executing command: {command:?}");
    Ok(handle_command(&command, &config, out).await)
}
