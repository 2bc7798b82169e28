//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::config::ListFormat;
use crate::record::{Branch, FormState, SEMESTERS};

/// Register command arguments: one filled-in registration form.
///
/// Every field is optional on the command line so that blank fields are
/// reported by form validation, not by argument parsing.
#[derive(Debug, Args)]
pub struct RegisterCommand {
    /// Student's full name
    #[arg(short = 'n', long, value_name = "NAME")]
    pub full_name: Option<String>,

    /// Enrollment number
    #[arg(short = 'e', long, value_name = "NUMBER")]
    pub enrollment_no: Option<String>,

    /// Academic branch
    #[arg(short, long, value_enum)]
    pub branch: Option<BranchArg>,

    /// Semester (1-8)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(i64::from(*SEMESTERS.start())..=i64::from(*SEMESTERS.end())))]
    pub semester: Option<u8>,

    /// Contact email
    #[arg(short = 'm', long)]
    pub email: Option<String>,

    /// Contact phone (10 digits)
    #[arg(short, long)]
    pub phone: Option<String>,
}

impl RegisterCommand {
    /// The form state these arguments describe.
    #[must_use]
    pub fn to_form(&self) -> FormState {
        FormState {
            full_name: self.full_name.clone(),
            enrollment_no: self.enrollment_no.clone(),
            branch: self.branch.map(|b| Branch::from(b).code().to_string()),
            semester: self.semester.map(|s| s.to_string()),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format (defaults to `output.default_format` from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Render command arguments.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Write the page to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Branch argument, matching the form's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum BranchArg {
    /// Computer Science and Engineering
    Cse,
    /// Information Technology
    It,
    /// Electronics and Communication Engineering
    Ece,
    /// Electrical and Electronics Engineering
    Eee,
    /// Mechanical Engineering
    Me,
    /// Civil Engineering
    Ce,
}

impl From<BranchArg> for Branch {
    fn from(arg: BranchArg) -> Self {
        match arg {
            BranchArg::Cse => Self::Cse,
            BranchArg::It => Self::It,
            BranchArg::Ece => Self::Ece,
            BranchArg::Eee => Self::Eee,
            BranchArg::Me => Self::Me,
            BranchArg::Ce => Self::Ce,
        }
    }
}

/// Output format for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One record per line
    Plain,
    /// Aligned table
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormat> for ListFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
        }
    }
}
