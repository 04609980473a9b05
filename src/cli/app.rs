use crate::io::paths::CONFIG_ENV_VAR;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// venv-security: trust gate for automatic virtualenv activation
#[derive(Parser, Debug)]
#[command(name = "venv-security")]
#[command(version)]
#[command(about = "Venv security whitelist/blocklist manager")]
#[command(
    long_about = "Venv security whitelist/blocklist manager.\n\n\
                  Exit codes:\n  \
                  0 = trusted (activate)\n  \
                  1 = blocked or declined (don't activate)\n  \
                  2 = error"
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Trust store file [default: ~/.config/zsh-safe-venv-auto/config.json]
    #[arg(long, global = true, env = CONFIG_ENV_VAR, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check a venv and prompt if unknown
    Check {
        /// Virtualenv directory
        venv_path: PathBuf,
    },

    /// Add a venv to the trusted list
    Trust {
        /// Virtualenv directory
        venv_path: PathBuf,
    },

    /// Add a venv to the blocked list
    Block {
        /// Virtualenv directory
        venv_path: PathBuf,
    },

    /// Remove a venv from both lists
    Remove {
        /// Virtualenv directory
        venv_path: PathBuf,
    },

    /// Show the current trusted and blocked venvs
    List {
        /// Print the raw trust store document
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Check { .. } => "check",
            Commands::Trust { .. } => "trust",
            Commands::Block { .. } => "block",
            Commands::Remove { .. } => "remove",
            Commands::List { .. } => "list",
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
