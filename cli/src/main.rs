use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "caldera", version, about = "Vent activation config inspector and simulator")]
struct Cli {
    /// Path to the activation config file (defaults to the platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective configuration
    Config,
    /// List the configured dormant → active conversions
    Recipes,
    /// Run a burner-over-dormant-vent scenario through the state machine
    Simulate {
        /// Number of ticks to run
        #[arg(short, long, default_value_t = 10)]
        ticks: u32,
        /// Drop the burner heat below threshold on this tick
        #[arg(long)]
        lapse_at: Option<u32>,
    },
}

fn main() -> Result<(), String> {
    init_logging();

    let cli = Cli::parse();

    let path = match cli.config {
        Some(path) => path,
        None => caldera_core::default_config_path()
            .ok_or_else(|| "could not determine a config directory; pass --config".to_string())?,
    };
    let config = caldera_core::load_or_create(&path);

    match cli.command {
        Commands::Config => commands::show_config(&path, &config),
        Commands::Recipes => commands::list_recipes(&config),
        Commands::Simulate { ticks, lapse_at } => commands::simulate(&config, ticks, lapse_at),
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
