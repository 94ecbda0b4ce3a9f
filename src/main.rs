use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use babylog::{Config, Tracker};
use commands::{
    BackupCommand, ConfigCommand, DiaperCommand, FeedCommand, HistoryCommand, WeightCommand,
};

#[derive(Parser)]
#[command(name = "babylog")]
#[command(version)]
#[command(about = "Track breastfeeding sessions, diaper changes and weight", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record feeding sessions
    Feed(FeedCommand),

    /// Record a diaper change
    Diaper(DiaperCommand),

    /// Record and list weight measurements
    Weight(WeightCommand),

    /// Show recorded days
    History(HistoryCommand),

    /// Export or restore all data
    Backup(BackupCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "babylog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    let command = match cli.command {
        Some(Commands::Config(cmd)) => return cmd.run(&config),
        Some(command) => command,
        None => {
            println!("Use --help to see available commands");
            return Ok(());
        }
    };

    let tracker = Tracker::from_config(&config);
    tracker.init().await?;

    let result = match command {
        Commands::Feed(cmd) => cmd.run(&tracker).await,
        Commands::Diaper(cmd) => cmd.run(&tracker).await,
        Commands::Weight(cmd) => cmd.run(&tracker).await,
        Commands::History(cmd) => cmd.run(&tracker).await,
        Commands::Backup(cmd) => cmd.run(&tracker).await,
        Commands::Config(cmd) => cmd.run(&config),
    };

    tracker.close().await;
    result
}
