//! Configuration management for the skill validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Conventions file discovery (project and user-global locations)

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::conventions::loader::PROJECT_CONVENTIONS_FILE;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for the skill validator
#[derive(Debug, Parser)]
#[command(name = "validate-skills")]
#[command(about = "Validate SKILL.md frontmatter and structure across a skills directory")]
#[command(version)]
pub struct Args {
    /// Directory containing one sub-directory per skill
    #[arg(long, default_value = "skills", help = "Path to skills directory")]
    pub skills_dir: PathBuf,

    /// Treat warnings as errors for the exit code
    #[arg(long, help = "Treat warnings as errors")]
    pub strict: bool,

    /// Conventions file overriding project and user settings
    #[arg(long, help = "Conventions TOML file (sections, description bounds)")]
    pub conventions: Option<PathBuf>,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level for diagnostics written to stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of the skills to validate
    pub skills_dir: PathBuf,
    /// Warnings fail the run
    pub strict: bool,
    pub format: OutputFormat,
    /// Conventions file explicitly set via command line
    pub cli_conventions: Option<PathBuf>,
    /// Project conventions file in the working directory
    pub project_conventions: Option<PathBuf>,
    /// Per-user conventions file
    pub user_conventions: Option<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;

        let user_conventions = dirs::config_dir()
            .map(|dir| dir.join("skill-validator").join("conventions.toml"));

        Ok(Config {
            skills_dir: args.skills_dir,
            strict: args.strict,
            format: args.format,
            cli_conventions: args.conventions,
            project_conventions: Some(cwd.join(PROJECT_CONVENTIONS_FILE)),
            user_conventions,
            log_level: args.log_level,
        })
    }

    /// Configuration for validating a directory with default settings
    pub fn for_dir(skills_dir: impl Into<PathBuf>) -> Self {
        Config {
            skills_dir: skills_dir.into(),
            strict: false,
            format: OutputFormat::Text,
            cli_conventions: None,
            project_conventions: None,
            user_conventions: None,
            log_level: "warn".to_string(),
        }
    }
}
