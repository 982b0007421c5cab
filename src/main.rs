use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use octocards::config::Config;
use octocards::logging::init_tracing;
use octocards::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "octocards", version, about = "GitHub user cards in the terminal")]
struct Cli {
    /// Path to an alternative config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            warn!(error = %err, "config invalid, falling back to defaults");
            Config::default()
        }),
    };

    runtime::run(&config).context("UI runtime failed")?;
    Ok(())
}
