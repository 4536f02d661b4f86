//! CLI command definitions for the `rolodex` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod user;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rolodex_observe::tracing_setup::LogFormat;

/// Create, duplicate, and print users in a directory.
#[derive(Parser)]
#[command(name = "rolodex", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format.
    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty, env = "ROLODEX_LOG_FORMAT", global = true)]
    pub log_format: LogFormatArg,

    /// Data directory holding config.toml (defaults to ~/.rolodex).
    #[arg(long, env = "ROLODEX_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// JSON file with an array of users to preload into the store.
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the chosen verbosity. `RUST_LOG` still wins.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,rolodex_core=debug,rolodex_infra=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a user's business card.
    Card {
        /// User id.
        id: String,
    },

    /// Copy a user under a new id.
    Duplicate {
        /// Id of the user to copy.
        id: String,
    },

    /// Create a user in the background and wait for it to appear.
    Create {
        /// New user id.
        id: String,

        /// Display name.
        #[arg(long)]
        name: String,

        /// Phone number.
        #[arg(long)]
        phone: String,

        /// How long to wait for the user to become visible.
        #[arg(long, default_value_t = 30)]
        wait_secs: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
