use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use hn_search::config::Config;
use hn_search::logging;

/// Search Hacker News stories from the terminal.
#[derive(Debug, Parser)]
#[command(name = "hn-search", version)]
struct Cli {
    /// Config file (defaults to <config_dir>/hn-search/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (defaults to <data_dir>/hn-search/hn-search.log).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.unwrap_or_else(logging::default_log_path);
    logging::init_tracing(Some(log_file.as_path()))
        .with_context(|| format!("Failed to open log file '{}'", log_file.display()))?;

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;
    tracing::info!(config = %config_path.display(), "Starting hn-search");

    hn_search::ui::runtime::run(&config).context("Terminal UI failed")?;
    Ok(())
}
