// CLI module - command-line argument parsing
//
// `e-ink` with no subcommand behaves like `e-ink build` with no flags:
// read the base style, write the light/dark family, print the report.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ink_color::AlphaPolicy;

use crate::config::ReportFormat;

/// Derive a paired light/dark editor theme by color inversion and grade its contrast.
#[derive(Parser, Debug)]
#[command(name = "e-ink")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Configuration file (default: ./e-ink.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level filter, e.g. `warn`, `debug`, `ink_theme=trace`
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build the theme family from the base style (default)
    Build(BuildArgs),

    /// Grade an already written theme family file
    Report {
        /// Theme family JSON file
        theme: PathBuf,

        /// Report output format
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },

    /// Inspect the effective configuration
    Config {
        /// Print the effective configuration as TOML
        #[arg(long)]
        show: bool,

        /// Print which configuration file is in use
        #[arg(long)]
        path: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Build(BuildArgs::default())
    }
}

/// Overrides for a build. Unset flags fall back to the configuration.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    /// Base style tree (JSON object)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Theme family output file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Key prefix to keep un-inverted; repeat to list several (replaces the defaults)
    #[arg(long = "ignore", value_name = "PREFIX")]
    pub ignore: Vec<String>,

    /// Invert every color, ignoring no keys
    #[arg(long, conflicts_with = "ignore")]
    pub no_ignore: bool,

    /// How rgba alpha survives inversion: `verbatim` or `integer-run`
    #[arg(long, value_name = "POLICY")]
    pub alpha: Option<AlphaPolicy>,

    /// Skip the contrast report
    #[arg(long)]
    pub no_report: bool,

    /// Report output format
    #[arg(long, value_enum)]
    pub report_format: Option<ReportFormat>,
}
