//! Main entry point for the rating ledger
//!
//! Loads configuration, replays a scenario (the built-in demo unless a
//! scenario file is given) and prints every player's history.

use anyhow::Result;
use clap::Parser;
use rating_ledger::config::AppConfig;
use rating_ledger::report::{self, ReportFormat};
use rating_ledger::{Scenario, ScenarioRunner};
use std::path::PathBuf;
use tracing::{error, info};

/// Rating Ledger - replay games and report player ratings
#[derive(Parser)]
#[command(
    name = "rating-ledger",
    version,
    about = "Replays scripted games through rating policies and prints each player's history",
    long_about = "Rating Ledger records wins and losses for players under pluggable rating \
                 policies (standard, training, reduced-loss and win-streak bonus) and prints \
                 the resulting game history tables."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Scenario file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to scenario file (TOML format); defaults to the built-in demo"
    )]
    scenario: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
    format: ReportFormat,

    /// Dry run mode (validate config and scenario, then exit)
    #[arg(
        long,
        help = "Validate configuration and scenario and exit without replaying games"
    )]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file or environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    rating_ledger::config::validate_config(&config)?;
    Ok(config)
}

fn load_scenario(args: &Args) -> Result<Scenario> {
    match &args.scenario {
        Some(path) => {
            info!("Loading scenario from: {}", path.display());
            Scenario::from_file(path)
        }
        None => {
            info!("Using built-in demo scenario");
            Ok(Scenario::demo())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Some(config_path) = &args.config {
        info!("Loaded configuration from: {}", config_path.display());
    }

    let scenario = load_scenario(&args)?;
    let mut runner = match ScenarioRunner::new(&config, &scenario) {
        Ok(runner) => runner,
        Err(e) => {
            error!("Invalid scenario: {:#}", e);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        if let Err(e) = runner.check_steps() {
            error!("Invalid scenario: {:#}", e);
            std::process::exit(1);
        }
        info!(
            players = scenario.players.len(),
            policies = scenario.policies.len(),
            games = scenario.games.len(),
            "Dry run completed - configuration and scenario are valid"
        );
        return Ok(());
    }

    if let Err(e) = runner.run() {
        error!("Scenario failed: {:#}", e);
        std::process::exit(1);
    }

    println!("{}", report::render(&runner.summaries(), args.format)?);
    Ok(())
}
