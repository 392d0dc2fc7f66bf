//! PGN merge CLI
//!
//! Reads a PGN file, strips commentary, and writes one merged variation tree
//! per chapter.

use clap::Parser;
use tracing::info;

use pgn_merge::{run, Cli, MergeConfig};

fn main() -> anyhow::Result<()> {
    // Load .env file for local overrides of PGN_MERGE_* settings
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = MergeConfig::from_cli(Cli::parse())?;
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        strict = config.strict,
        "Config loaded"
    );

    let summary = run(&config)?;
    info!(
        games = summary.games,
        chapters = summary.chapters,
        plies = summary.plies,
        "Done"
    );

    Ok(())
}
