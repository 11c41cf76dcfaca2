//! Tabletop CLI binary.

use anyhow::Result;
use tabletop::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the tabletop CLI.
///
/// Uses tokio's current_thread runtime: commands do a handful of sequential
/// file reads and nothing runs concurrently.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=tabletop=debug,tabletop_jsonl=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tabletop=info,tabletop_jsonl=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting tabletop CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Tabletop CLI completed successfully");
    Ok(())
}
