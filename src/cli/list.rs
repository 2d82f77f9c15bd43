use clap::Args;
use colored::*;
use std::io::Write;

use crate::error::Result;
use crate::vector_client::Connect;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ListArgs {
    /// Endpoint to use (defaults to the preferred endpoint).
    pub endpoint_name: Option<String>,

    /// Anything after the endpoint name is accepted and dropped.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

/// Handles the `list` command, printing every collection name on the endpoint.
pub async fn handle_list<K, W>(args: &ListArgs, connector: &K, out: &mut W) -> bool
where
    K: Connect,
    W: Write,
{
    match list_collections(args, connector, out).await {
        Ok(()) => true,
        Err(e) => {
            log::error!("Error listing collections: {e:?}");
            writeln!(out, "{}", format!("Error listing collections: {e}").red()).ok();
            false
        }
    }
}

async fn list_collections<K, W>(args: &ListArgs, connector: &K, out: &mut W) -> Result<()>
where
    K: Connect,
    W: Write,
{
    let client = connector.connect(args.endpoint_name.as_deref())?;
    writeln!(out, "Using endpoint: {}", client.endpoint_name())?;

    let collections = client.list_collections().await?;
    log::debug!("Endpoint '{}' reported {} collections", client.endpoint_name(), collections.len());

    writeln!(out, "Found {} collections:", collections.len())?;
    for name in &collections {
        writeln!(out, "  - {name}")?;
    }
    Ok(())
}
