// SPDX-License-Identifier: MIT
//
// e-ink: derive a paired light/dark editor theme from one base style.
//
// This is the binary that wires the two library crates together:
//
//   ink-color → color codec, inversion, WCAG contrast math
//   ink-theme → style tree walk, theme family, report, file I/O
//
// A build run flows through:
//
//   style.json → load → invert copy → family{light, dark} → dist/e-ink.json
//                                            │
//                                            └→ contrast report → stdout
//
// Logs go to stderr so stdout carries only the report.

mod cli;
mod config;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ink_color::Inverter;
use ink_theme::report::{VariantReport, family_report, render_text};
use ink_theme::{ThemeFamily, TreeTransformer, store};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::{Config, ReportFormat};

// ─── Logging ────────────────────────────────────────────────────────────────

/// Install the stderr subscriber. `RUST_LOG` wins over `default_filter`.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ─── Commands ───────────────────────────────────────────────────────────────

/// Load the base style, derive the family, write it, then report.
fn build(config: &Config) -> Result<()> {
    let base = store::load_style(&config.input).context("cannot load the base style")?;

    let transformer = TreeTransformer::new(config.ignore_rules(), Inverter::new(config.alpha));
    debug!(
        prefixes = ?transformer.rules().prefixes(),
        alpha = %transformer.inverter().alpha_policy(),
        "inverting base style"
    );
    let family = ThemeFamily::derive(&config.family, base, &transformer);

    store::write_family(&config.output, &family).context("cannot write the theme family")?;
    if config.report_format == ReportFormat::Text {
        println!("Theme file has been created at: {}", config.output.display());
    }

    if config.report {
        print_report(&family_report(&family), config.report_format)?;
    }
    Ok(())
}

/// Grade an existing family file without rebuilding it.
fn report(theme: &Path, format: ReportFormat) -> Result<()> {
    let family = store::load_family(theme).context("cannot load the theme family")?;
    info!(path = %theme.display(), variants = family.themes.len(), "grading theme family");
    print_report(&family_report(&family), format)
}

fn print_report(reports: &[VariantReport], format: ReportFormat) -> Result<()> {
    for r in reports {
        let below = r.below_aa();
        if below > 0 {
            warn!(variant = %r.name, count = below, "colors below WCAG AA against the background");
        }
    }
    match format {
        ReportFormat::Text => print!("{}", render_text(reports)),
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(reports).context("cannot render the report")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn show_config(config: &Config, source: Option<&Path>, show: bool, path: bool) -> Result<()> {
    if path || !show {
        match source {
            Some(p) => println!("{}", p.display()),
            None => println!("(built-in defaults)"),
        }
    }
    if show {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn run(cli: Cli) -> Result<()> {
    let (mut config, source) = Config::discover(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    init_logging(&config.log_level);
    if let Some(path) = &source {
        debug!(path = %path.display(), "configuration loaded");
    }

    match cli.command.unwrap_or_default() {
        Command::Build(args) => {
            config.apply_build_args(&args);
            build(&config)
        }
        Command::Report { theme, format } => {
            report(&theme, format.unwrap_or(config.report_format))
        }
        Command::Config { show, path } => show_config(&config, source.as_deref(), show, path),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("e-ink: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

// ─── Tests ──────────────────────────────────────────────────────────────────
