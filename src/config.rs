//! Configuration for the theme builder.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults (`style.json` → `dist/e-ink.json`, Zed schema,
//!    ignore prefixes `error` and `warning`)
//! 2. A TOML file: `--config FILE`, or `e-ink.toml` in the working
//!    directory when it exists
//! 3. Command-line flags

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use ink_color::AlphaPolicy;
use ink_theme::{FamilyMeta, IgnoreRules};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::BuildArgs;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "e-ink.toml";

/// Errors raised while loading or rendering the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to render configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Console report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned human-readable listing
    #[default]
    Text,
    /// The report structure as pretty-printed JSON
    Json,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base style tree.
    pub input: PathBuf,
    /// Theme family output file. Its directory is created when missing.
    pub output: PathBuf,
    /// Default log filter; `RUST_LOG` overrides it.
    pub log_level: String,
    /// Print the contrast report after building.
    pub report: bool,
    pub report_format: ReportFormat,
    pub alpha: AlphaPolicy,
    /// Key prefixes whose subtrees keep their original colors.
    pub ignore_prefixes: Vec<String>,
    pub family: FamilyMeta,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("style.json"),
            output: PathBuf::from("dist").join("e-ink.json"),
            log_level: "warn".to_owned(),
            report: true,
            report_format: ReportFormat::Text,
            alpha: AlphaPolicy::default(),
            ignore_prefixes: IgnoreRules::DEFAULT_PREFIXES
                .iter()
                .map(|p| (*p).to_owned())
                .collect(),
            family: FamilyMeta::default(),
        }
    }
}

impl Config {
    /// Load a configuration file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input or unknown enum values.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Resolve the configuration file to use and load it.
    ///
    /// An explicit path must exist. Without one, `e-ink.toml` in the working
    /// directory is used if present, otherwise the defaults. Returns the file
    /// actually loaded alongside the configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`Config::load`] failures.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !local.is_file() {
                    return Ok((Self::default(), None));
                }
                local
            }
        };
        let config = Self::load(&path)?;
        Ok((config, Some(path)))
    }

    /// Apply command-line overrides for a build.
    pub fn apply_build_args(&mut self, args: &BuildArgs) {
        if let Some(input) = &args.input {
            self.input.clone_from(input);
        }
        if let Some(output) = &args.output {
            self.output.clone_from(output);
        }
        if args.no_ignore {
            self.ignore_prefixes.clear();
        } else if !args.ignore.is_empty() {
            self.ignore_prefixes.clone_from(&args.ignore);
        }
        if let Some(alpha) = args.alpha {
            self.alpha = alpha;
        }
        if args.no_report {
            self.report = false;
        }
        if let Some(format) = args.report_format {
            self.report_format = format;
        }
    }

    #[must_use]
    pub fn ignore_rules(&self) -> IgnoreRules {
        IgnoreRules::new(&self.ignore_prefixes)
    }

    /// Render the configuration as a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if rendering fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_zed_family() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("style.json"));
        assert_eq!(config.output, PathBuf::from("dist/e-ink.json"));
        assert_eq!(config.ignore_prefixes, ["error", "warning"]);
        assert_eq!(config.alpha, AlphaPolicy::Verbatim);
        assert_eq!(config.family.schema, FamilyMeta::ZED_SCHEMA);
        assert!(config.report);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            input = "themes/base.json"
            alpha = "integer-run"
            ignore_prefixes = ["error", "warning", "hint"]

            [family]
            name = "paper"
            dark_name = "Paper Night"
            "#,
        )
        .unwrap();
        assert_eq!(config.input, PathBuf::from("themes/base.json"));
        assert_eq!(config.output, Config::default().output);
        assert_eq!(config.alpha, AlphaPolicy::IntegerRun);
        assert_eq!(config.ignore_prefixes, ["error", "warning", "hint"]);
        assert_eq!(config.family.name, "paper");
        assert_eq!(config.family.dark_name, "Paper Night");
        assert_eq!(config.family.light_name, "E-Ink Light");
    }

    #[test]
    fn bad_enum_value_is_rejected() {
        assert!(Config::from_toml(r#"report_format = "html""#).is_err());
        assert!(Config::from_toml(r#"alpha = "float""#).is_err());
    }

    #[test]
    fn toml_roundtrip() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn load_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("e-ink.toml");
        fs::write(&path, "report = maybe").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("e-ink.toml"), "{err}");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::discover(Some(&missing)).is_err());
    }

    #[test]
    fn build_args_override() {
        let mut config = Config::default();
        config.apply_build_args(&BuildArgs {
            input: Some(PathBuf::from("in.json")),
            ignore: vec!["Hint".to_owned()],
            no_report: true,
            report_format: Some(ReportFormat::Json),
            ..BuildArgs::default()
        });
        assert_eq!(config.input, PathBuf::from("in.json"));
        assert_eq!(config.output, Config::default().output);
        assert_eq!(config.ignore_prefixes, ["Hint"]);
        assert!(config.ignore_rules().is_ignored("hint.border"));
        assert!(!config.report);
        assert_eq!(config.report_format, ReportFormat::Json);
    }

    #[test]
    fn no_ignore_clears_prefixes() {
        let mut config = Config::default();
        config.apply_build_args(&BuildArgs { no_ignore: true, ..BuildArgs::default() });
        assert!(config.ignore_rules().prefixes().is_empty());
    }
}
