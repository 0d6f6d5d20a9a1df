//! CLI application for electricity-bill carbon tracking.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, estimate, factors, offset, process};

/// Carbon tracker - extract consumption from electricity bills and score it
#[derive(Parser)]
#[command(name = "carbontrackr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a single bill
    Process(process::ProcessArgs),

    /// Process multiple bill text files
    Batch(batch::BatchArgs),

    /// Inspect the emission factor table
    Factors(factors::FactorsArgs),

    /// Estimate device energy use and emissions
    Estimate(estimate::EstimateArgs),

    /// Plan carbon offsets against a target
    Offset(offset::OffsetArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Process(args) => process::run(args, cli.config.as_deref()).await,
        Commands::Batch(args) => batch::run(args, cli.config.as_deref()).await,
        Commands::Factors(args) => factors::run(args, cli.config.as_deref()),
        Commands::Estimate(args) => estimate::run(args),
        Commands::Offset(args) => offset::run(args),
        Commands::Config(args) => config::run(args),
    }
}
