//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Setgen - main test-set script generator
///
/// Scans a directory of MODEL_NAME.Test.xxx.xml test scripts and writes one
/// MODEL_NAME.xml per model that includes every test script of that model,
/// wrapped in the given header and footer templates.
///
/// Examples:
///   setgen scripts/ sets/ header.xml footer.xml
///   setgen scripts/ sets/ header.xml footer.xml --verbose
///   setgen scripts/ sets/ header.xml footer.xml --dry-run
///   setgen --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The directory where the test case scripts are located
    #[arg(required_unless_present = "init_config")]
    pub origin_folder: Option<PathBuf>,

    /// The directory where test set scripts will be saved
    #[arg(required_unless_present = "init_config")]
    pub destination_folder: Option<PathBuf>,

    /// The path to the header template file
    #[arg(required_unless_present = "init_config")]
    pub path_to_header: Option<PathBuf>,

    /// The path to the footer template file
    #[arg(required_unless_present = "init_config")]
    pub path_to_footer: Option<PathBuf>,

    /// Increase output verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    ///
    /// If not specified, looks for .setgen.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scan and list the detected models without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON summary of the run on stdout
    #[arg(long)]
    pub summary_json: bool,

    /// Generate a default .setgen.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.origin_folder.is_none()
            || self.destination_folder.is_none()
            || self.path_to_header.is_none()
            || self.path_to_footer.is_none()
        {
            return Err(
                "origin_folder, destination_folder, path_to_header and path_to_footer are required"
                    .to_string(),
            );
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.verbose && self.summary_json {
            return Err("Cannot use both --verbose and --summary-json".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
