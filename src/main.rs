use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod data;
mod error;
mod scheduler;
mod util;

use cmd::settings::SettingsCommand;
use data::Store;

/// Keeps Markdown notes of free game giveaways, grouped by platform.
#[derive(Parser)]
#[command(name = "giveaway-notes", version, about)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Refresh once at startup, then keep notes updated on schedule until Ctrl-C.
    Run,

    /// Refresh Game Giveaways By Platform, once.
    Refresh,

    /// Show or change settings.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("giveaway_notes=info,tokio_cron_scheduler=warn")
        }))
        .init();

    let cli = Cli::parse();
    let store = Store::new(cli.config);

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => cmd::run::execute(&store.load()?).await,
        Command::Refresh => cmd::refresh::execute(&store.load()?).await,
        Command::Settings(command) => cmd::settings::execute(&store, command),
    }
}
