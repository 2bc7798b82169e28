//! Command-line interface for registrar.
//!
//! This module provides the CLI structure for the `registrar` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::Verbosity;

pub use commands::{
    BranchArg, ConfigCommand, ListCommand, OutputFormat, RegisterCommand, RenderCommand,
    StatusCommand,
};

/// registrar - Student chapter registration desk
///
/// Registers students into a local record store and shows the stored
/// registrations as a table or an HTML page.
#[derive(Debug, Parser)]
#[command(name = "registrar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and rejected registrations
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a student
    Register(RegisterCommand),

    /// List registered students
    List(ListCommand),

    /// Render registered students as an HTML page
    Render(RenderCommand),

    /// Print the stored records as JSON
    Export,

    /// Show storage status
    Status(StatusCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}
