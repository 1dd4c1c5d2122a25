//! Command-line interface for BridgeFinder

use clap::Parser;
use std::process;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

mod cli;
mod client;
mod commands;
mod config;
mod input;
mod output;

use cli::*;
use config::BridgectlConfig;
use input::CsvOptions;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v when set
    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration
    let config = match BridgectlConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Override config with CLI args
    let config = config.with_overrides(&args);

    info!("Starting bridgectl with endpoint: {}", config.endpoint);

    // Execute command
    let result = match args.command {
        Commands::Serve { bind, no_cors } => {
            commands::serve::handle_serve_command(bind, no_cors, &config).await
        }
        Commands::Analyze {
            file,
            nodes,
            delimiter,
            header,
            remote,
        } => {
            let options = CsvOptions {
                delimiter,
                has_header: header,
                nodes,
            };
            commands::analyze::handle_analyze_command(&file, options, remote, args.quiet, &config)
                .await
        }
        Commands::Health => commands::health::handle_health_command(&config).await,
    };

    match result {
        Ok(_) => {
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            process::exit(1);
        }
    }
}
