use serde::{Deserialize, Serialize};
use std::path::Path;

use super::check::{CheckConfig, ReportFormat};
use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_LEVELS};

pub const DEFAULT_CONFIG_FILE: &str = "zonecheck.toml";

/// Main configuration structure for zonecheck
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Record set checking and reporting
    #[serde(default)]
    pub check: CheckConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonecheck.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.format {
            self.check.format = format;
        }
        if let Some(fail) = overrides.fail_on_issues {
            self.check.fail_on_issues = fail;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.logging.is_valid_filter() {
            return Err(ConfigError::Validation(format!(
                "Invalid log filter '{}' (levels: {}; directives: target=level)",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub format: Option<ReportFormat>,
    pub fail_on_issues: Option<bool>,
}
