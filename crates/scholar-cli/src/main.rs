// crates/scholar-cli/src/main.rs
//
// CLI entrypoint for the ScholarChains reputation tools.
//
// Loads configuration, initializes tracing, and dispatches to subcommands
// for scoring subjects from an events fixture and inspecting the tier table.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use commands::score::ScoreCmd;
use config::{ScholarConfig, DEFAULT_CONFIG_PATH};
use output::OutputFormat;
use scholar_core::ScholarError;

/// ScholarChains CLI — reputation scoring for decentralized peer review.
#[derive(Parser, Debug)]
#[command(
    name = "scholar",
    version = "0.1.0",
    about = "ScholarChains CLI — multi-factor, decay-based reputation for authors and reviewers"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Print JSON instead of tables (overrides the configured output).
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute reputation for subjects in an events fixture.
    Score(ScoreCmd),

    /// Display the reputation tier table and permissions.
    Tiers,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration before tracing so the configured level applies;
    // the outcome is logged once the subscriber is up.
    let loaded = ScholarConfig::load(&cli.config);
    let config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => ScholarConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match loaded {
        Ok(_) => tracing::debug!("Loaded configuration from {}", cli.config),
        // No config file is the common case.
        Err(ScholarError::Io(e)) => {
            tracing::debug!("No config at {}: {}. Using defaults.", cli.config, e)
        }
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            cli.config,
            e
        ),
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output_format()
    };

    match &cli.command {
        Commands::Score(cmd) => commands::score::run(cmd, &config.policy(), format).await?,
        Commands::Tiers => commands::tiers::run(format)?,
    }

    Ok(())
}
