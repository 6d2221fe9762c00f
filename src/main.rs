use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use debug_sweeper::cli::{Cli, Command};
use debug_sweeper::commands;
use debug_sweeper::config::Config;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::CleanDebug(args) => {
            tracing::info!(?args, "Starting clean:debug");
            commands::clean_debug::run(args, &config, cli.quiet)
        }
        Command::Completions(args) => {
            commands::completions::run(args);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("debug_sweeper={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
