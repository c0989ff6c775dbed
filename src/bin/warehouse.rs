//! warehouse - run a command script against a fresh catalog.
//!
//! Reads `<script>`, applies every command, then writes the final snapshot
//! to `--output` or stdout. Set `RUST_LOG=debug` to see evictions and
//! relocations as they happen.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use warehousedb::command::{run_script, write_snapshot};
use warehousedb::Placement;

/// Run a warehouse command script and print the final catalog.
#[derive(Debug, Parser)]
#[command(name = "warehouse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Script to run: a count followed by that many commands.
    script: PathBuf,

    /// Write the snapshot here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fill free slots in other buckets before evicting anything.
    #[arg(long)]
    probing: bool,
}

fn main() -> warehousedb::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let placement = if cli.probing {
        Placement::Probing
    } else {
        Placement::Home
    };

    let catalog = run_script(&cli.script, placement)?;
    tracing::info!(stats = %catalog.stats(), "catalog built");

    match cli.output {
        Some(path) => write_snapshot(&catalog, path)?,
        None => {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", catalog.snapshot())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
