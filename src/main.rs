// Main entry point for assertify

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::{debug, warn};

use assertify::cli::{Cli, Commands};
use assertify::commands::{handle_compare, handle_completion, handle_demo};
use assertify::config::Config;
use assertify::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    debug!("Starting assertify v{}", env!("CARGO_PKG_VERSION"));

    // A broken config file should not block assertions
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring configuration: {}", e);
            None
        }
    };

    if let Some(shell) = cli.completion {
        return handle_completion(shell);
    }

    if let Some(ref path) = cli.init_config {
        let toml = Config::default().to_toml();
        std::fs::write(path, toml)
            .with_context(|| format!("Failed to write configuration: {}", path.display()))?;
        println!("Created configuration file: {}", path.display());
        return Ok(());
    }

    let effective = config.clone().unwrap_or_default();
    let options = cli
        .report_args()
        .apply(effective.report_options(), cli.no_color);

    if cli.config {
        println!("Current configuration:");
        match Config::discover() {
            Some(path) if config.is_some() => println!("  Loaded from: {}", path.display()),
            _ => {
                println!("  No configuration file loaded");
                println!("  Create one with: assertify --init-config .assertifyrc.toml");
            }
        }
        println!("  Report style: {:?}", options.style);
        println!("  Show mismatch: {}", options.show_mismatch);
        println!("  Show diff: {}", options.show_diff);
        return Ok(());
    }

    let passed = match &cli.command {
        Some(Commands::Compare(args)) => handle_compare(args, options)?,
        Some(Commands::Demo(_)) => handle_demo(options)?,
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}
