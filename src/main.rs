use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use venv_security::{
    cli::commands::{
        block::BlockCommand, check::CheckCommand, list::ListCommand, remove::RemoveCommand,
        trust::TrustCommand, CommandHandler, CommandResult,
    },
    cli::{Cli, Commands, LogLevel},
    io::ConfigPaths,
};

/// Exit code for usage errors and failures to record a decision
const EXIT_ERROR: u8 = 2;

/// Logs go to stderr; stdout carries the prompt and user-facing messages.
/// `RUST_LOG` takes precedence over `--log-level`.
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help/version go to stdout with exit 0, usage errors to stderr with 2
            let _ = e.print();
            return ExitCode::from(e.exit_code().clamp(0, 255) as u8);
        }
    };

    initialize_tracing(cli.log_level);

    match run(cli) {
        Ok(result) => ExitCode::from(result.exit_code() as u8),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<CommandResult> {
    let paths = ConfigPaths::resolve(cli.config).context("Failed to locate trust store")?;
    let handler = handler_for(cli.command, paths.config_file);

    debug!(command = handler.name(), "Dispatching");
    handler
        .execute()
        .with_context(|| format!("{} command failed", handler.name()))
}

fn handler_for(command: Commands, store_file: PathBuf) -> Box<dyn CommandHandler> {
    match command {
        Commands::Check { venv_path } => Box::new(CheckCommand::new(venv_path, store_file)),
        Commands::Trust { venv_path } => Box::new(TrustCommand::new(venv_path, store_file)),
        Commands::Block { venv_path } => Box::new(BlockCommand::new(venv_path, store_file)),
        Commands::Remove { venv_path } => Box::new(RemoveCommand::new(venv_path, store_file)),
        Commands::List { json } => Box::new(ListCommand::new(json, store_file)),
    }
}
