//! Configuration management and validation.
//!
//! Provides configuration structures for validation tolerance, scoring
//! penalties, output and logging, loaded in layers: built-in defaults, an
//! optional TOML file, environment variables, then command-line overrides.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_HIGH_PENALTY, DEFAULT_LOG_LEVEL,
    DEFAULT_LOW_PENALTY, DEFAULT_MEDIUM_PENALTY, DEFAULT_RECONCILIATION_TOLERANCE,
    DEFAULT_SCORE_FLOOR, MAX_SCORE, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level checker configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub validation: ValidationConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Row validation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Allowed relative gap between the scope sum and the total (0.15 = 15%)
    pub reconciliation_tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reconciliation_tolerance: DEFAULT_RECONCILIATION_TOLERANCE,
        }
    }
}

/// Score penalties per issue severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub high_penalty: i32,
    pub medium_penalty: i32,
    pub low_penalty: i32,
    /// Lowest score ever reported
    pub floor: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            high_penalty: DEFAULT_HIGH_PENALTY,
            medium_penalty: DEFAULT_MEDIUM_PENALTY,
            low_penalty: DEFAULT_LOW_PENALTY,
            floor: DEFAULT_SCORE_FLOOR,
        }
    }
}

/// Terminal output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colorize severities and scores in human output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level filter for the checker's own log events
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Default configuration file location under the platform config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from TOML text
    ///
    /// Missing sections and keys fall back to defaults.
    pub fn from_toml_str(content: &str, source_name: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            Error::config_parsing(source_name, "invalid TOML configuration", e)
        })
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Load defaults, then the config file (if any), then environment overrides
    ///
    /// An explicit `config_file` must exist. Without one, the default location
    /// is used only when a file is present there.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => {
                    debug!("Loading default config file: {}", path.display());
                    Self::from_file(&path)?
                }
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env()?;
        Ok(config)
    }

    /// Apply overrides from process environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an environment lookup function
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env_vars::TOLERANCE) {
            self.validation.reconciliation_tolerance = value.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a number, got '{}'",
                    env_vars::TOLERANCE,
                    value
                ))
            })?;
        }

        if let Some(level) = lookup(env_vars::LOG_LEVEL) {
            self.logging.level = level.trim().to_lowercase();
        }

        if let Some(value) = lookup(env_vars::NO_COLOR) {
            let value = value.trim();
            if !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false") {
                self.output.color = false;
            }
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let tolerance = self.validation.reconciliation_tolerance;
        if !tolerance.is_finite() || !(0.0..=1.0).contains(&tolerance) {
            return Err(Error::configuration(format!(
                "Reconciliation tolerance must be between 0 and 1, got {}",
                tolerance
            )));
        }

        let penalties = [
            ("high_penalty", self.scoring.high_penalty),
            ("medium_penalty", self.scoring.medium_penalty),
            ("low_penalty", self.scoring.low_penalty),
        ];
        for (name, penalty) in penalties {
            if penalty < 0 {
                return Err(Error::configuration(format!(
                    "Scoring {} must be non-negative, got {}",
                    name, penalty
                )));
            }
        }

        if !(0..=MAX_SCORE).contains(&self.scoring.floor) {
            return Err(Error::configuration(format!(
                "Score floor must be between 0 and {}, got {}",
                MAX_SCORE, self.scoring.floor
            )));
        }

        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(Error::configuration(format!(
                "Unknown log level '{}'. Expected one of: error, warn, info, debug, trace",
                other
            ))),
        }
    }
}
