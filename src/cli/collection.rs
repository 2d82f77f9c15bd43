use clap::Args;
use colored::*;
use std::io::Write;

use crate::constants::DEFAULT_VECTOR_SIZE;
use crate::error::Result;
use crate::vector_client::Connect;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CollectionArgs {
    /// Name of the collection (defaults to the endpoint's configured collection).
    pub collection_name: Option<String>,

    /// Dimensionality of the stored vectors.
    #[arg(default_value_t = DEFAULT_VECTOR_SIZE)]
    pub vector_size: u64,

    /// Endpoint to use (defaults to the preferred endpoint).
    pub endpoint_name: Option<String>,

    /// Anything after the endpoint name is accepted and dropped.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

/// Handles the `create` command. An existing collection counts as success and is left untouched.
pub async fn handle_create<K, W>(args: &CollectionArgs, connector: &K, out: &mut W) -> bool
where
    K: Connect,
    W: Write,
{
    report(create_or_recreate(args, connector, false, out).await, out)
}

/// Handles the `recreate` command: drops the collection if present, then creates it.
pub async fn handle_recreate<K, W>(args: &CollectionArgs, connector: &K, out: &mut W) -> bool
where
    K: Connect,
    W: Write,
{
    report(create_or_recreate(args, connector, true, out).await, out)
}

fn report<W: Write>(result: Result<bool>, out: &mut W) -> bool {
    match result {
        Ok(success) => success,
        Err(e) => {
            log::error!("Error creating collection: {e:?}");
            writeln!(out, "{}", format!("Error creating collection: {e}").red()).ok();
            false
        }
    }
}

async fn create_or_recreate<K, W>(
    args: &CollectionArgs,
    connector: &K,
    recreate: bool,
    out: &mut W,
) -> Result<bool>
where
    K: Connect,
    W: Write,
{
    let client = connector.connect(args.endpoint_name.as_deref())?;
    let collection_name = client.collection_name(args.collection_name.as_deref()).to_string();
    let vector_size = args.vector_size;

    writeln!(out, "Using endpoint: {}", client.endpoint_name())?;
    writeln!(out, "Collection name: {collection_name}")?;
    writeln!(out, "Vector size: {vector_size}")?;

    if recreate {
        writeln!(out, "Recreating collection '{collection_name}'...")?;
        let success = client.recreate_collection(Some(collection_name.as_str()), vector_size).await?;
        if success {
            writeln!(out, "{}", format!("Successfully recreated collection '{collection_name}'").green())?;
        } else {
            writeln!(out, "{}", "Collection recreation failed".red())?;
        }
        return Ok(success);
    }

    if client.collection_exists(Some(collection_name.as_str())).await? {
        writeln!(out, "{}", format!("Collection '{collection_name}' already exists!").yellow())?;
        return Ok(true);
    }

    writeln!(out, "Creating collection '{collection_name}'...")?;
    let success = client.create_collection(Some(collection_name.as_str()), vector_size).await?;
    if success {
        writeln!(out, "{}", format!("Successfully created collection '{collection_name}'").green())?;
    } else {
        writeln!(out, "{}", "Collection creation failed or collection already exists".yellow())?;
    }
    Ok(success)
}
