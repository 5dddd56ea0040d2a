mod app;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use chatlist_state::config::AppConfig;
use chatlist_state::ChatListSnapshot;

use crate::app::{App, Command};

#[derive(Parser, Debug)]
#[command(name = "chatlist", about = "Inspect a sectioned chat-list snapshot")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Snapshot file (.toml or .json), overrides the config
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from("configs/default.toml"));
    let config = AppConfig::load(&config_path)?;

    // Logs go to a file so stdout only carries command output
    let data_dir = PathBuf::from(&config.general.data_dir);
    std::fs::create_dir_all(&data_dir)?;
    let file_appender = tracing_appender::rolling::never(&data_dir, "chatlist.log");
    let log_level = if cli.debug {
        "debug"
    } else {
        config.general.log_level.as_str()
    };

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Starting chatlist");
    tracing::info!("Config loaded from: {}", config_path.display());

    let app = App::new();
    match cli.snapshot.or_else(|| config.snapshot_path()) {
        Some(path) => {
            let snapshot = ChatListSnapshot::load(&path)
                .with_context(|| format!("failed to read snapshot {}", path.display()))?;
            app.load_snapshot(snapshot)?;
        }
        None => tracing::info!("No snapshot configured, using the empty chat list"),
    }

    let output = app.execute(&cli.command);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{output}");
    }

    Ok(())
}
