use anyhow::Result;
use tracing_subscriber::EnvFilter;

use collection_admin::cli::{parse_cli_args, run};

#[tokio::main]
async fn main() -> Result<()> {
    // --- Setup Tracing ---
    // RUST_LOG overrides the default; `log` records from the library are collected too.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // --- Parse Args ---
    let args = parse_cli_args(std::env::args()).unwrap_or_else(|e| e.exit());
    tracing::debug!("Parsed arguments: {:?}", args);

    // --- Execute Command ---
    let mut stdout = std::io::stdout();
    match run(args, &mut stdout).await? {
        Some(true) => tracing::debug!("Command executed successfully."),
        Some(false) => tracing::info!("Command reported failure; exiting normally."),
        None => {}
    }

    Ok(())
}
