//! modforge CLI library
//!
//! Argument definitions and command implementations behind the `modforge`
//! binary. Commands write their status lines to any [`std::io::Write`] so
//! they can be driven from tests.

#![forbid(unsafe_code)]

pub mod commands;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use modforge::config::ModforgeConfig;
use modforge::observability::{LogFormat, ObservabilityConfig};

use commands::{MakeModuleCommand, RoutesCommand, StubPublishCommand};

/// Command-line interface
#[derive(Debug, Parser)]
#[command(name = "modforge")]
#[command(version)]
#[command(about = "Module scaffolding for modular axum applications", long_about = None)]
pub struct Cli {
    /// Configuration file used instead of ./modforge.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log output format on stderr
    #[arg(long, global = true, value_enum, default_value_t)]
    pub log_format: LogFormatArg,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormatArg {
    /// Single-line output (default)
    #[default]
    Compact,
    /// Multi-line output with source locations
    Pretty,
    /// One JSON object per event
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the files of a module
    #[command(name = "make:module")]
    MakeModule(MakeModuleCommand),

    /// Show the route groups discovered for the configured modules
    Routes(RoutesCommand),

    /// Copy the built-in stubs into the project for customization
    #[command(name = "stub:publish")]
    StubPublish(StubPublishCommand),
}

/// Whether a run completed without artifact failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything requested was created or already existed
    Success,
    /// At least one artifact failed
    Failed,
}

impl Cli {
    /// Load configuration for this invocation
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load_config(&self) -> Result<ModforgeConfig> {
        ModforgeConfig::load(self.config.as_deref()).context("Failed to load configuration")
    }

    /// Logging configuration from `-v` and `--log-format`
    #[must_use]
    pub fn observability(&self) -> ObservabilityConfig {
        ObservabilityConfig::for_verbosity(self.verbose).with_format(self.log_format.into())
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error for invalid input or configuration. Per-artifact
    /// failures are reported through [`Outcome::Failed`] instead.
    pub fn run(&self, out: &mut impl Write) -> Result<Outcome> {
        let config = self.load_config()?;
        match &self.command {
            Command::MakeModule(cmd) => cmd.execute(&config, out),
            Command::Routes(cmd) => cmd.execute(&config, out).map(|()| Outcome::Success),
            Command::StubPublish(cmd) => cmd.execute(&config, out).map(|()| Outcome::Success),
        }
    }
}
