//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags, when given, override these values.

use checkout_core::Role;
use clap::ValueEnum;
use std::env;
use tracing_subscriber::EnvFilter;

use crate::cli::OutputFormat;

/// Role used when `--role` is not given.
pub const ENV_DEFAULT_ROLE: &str = "CHECKOUT_DEFAULT_ROLE";

/// Output format used when `--format` is not given.
pub const ENV_OUTPUT: &str = "CHECKOUT_OUTPUT";

/// Log filter used when `RUST_LOG` is not set.
pub const ENV_LOG: &str = "CHECKOUT_LOG";

/// Default log filter: quiet dependencies, info from the binary and this crate.
pub const DEFAULT_LOG_FILTER: &str = "warn,checkout=info,checkout_cli=info";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub default_role: Role,
    pub output: OutputFormat,
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            default_role: Role::Standard,
            output: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// Unset and blank variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = CliConfig::default();

        let default_role = match get(ENV_DEFAULT_ROLE) {
            Some(v) => v
                .parse::<Role>()
                .map_err(|_| ConfigError::InvalidValue(ENV_DEFAULT_ROLE.to_string()))?,
            None => defaults.default_role,
        };

        let output = match get(ENV_OUTPUT) {
            Some(v) => <OutputFormat as ValueEnum>::from_str(&v, true)
                .map_err(|_| ConfigError::InvalidValue(ENV_OUTPUT.to_string()))?,
            None => defaults.output,
        };

        let log_filter = match get(ENV_LOG) {
            Some(v) => {
                EnvFilter::try_new(&v)
                    .map_err(|_| ConfigError::InvalidValue(ENV_LOG.to_string()))?;
                v
            }
            None => defaults.log_filter,
        };

        Ok(CliConfig {
            default_role,
            output,
            log_filter,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[(ENV_DEFAULT_ROLE, "  "), (ENV_OUTPUT, "")]).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = load(&[
            (ENV_DEFAULT_ROLE, "Veteran"),
            (ENV_OUTPUT, "JSON"),
            (ENV_LOG, "debug"),
        ])
        .unwrap();

        assert_eq!(config.default_role, Role::Veteran);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_role() {
        assert_eq!(
            load(&[(ENV_DEFAULT_ROLE, "admin")]),
            Err(ConfigError::InvalidValue(ENV_DEFAULT_ROLE.to_string()))
        );
    }

    #[test]
    fn test_invalid_output() {
        let err = load(&[(ENV_OUTPUT, "xml")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CHECKOUT_OUTPUT");
    }

    #[test]
    fn test_invalid_log_filter() {
        assert_eq!(
            load(&[(ENV_LOG, "checkout_cli=notalevel")]),
            Err(ConfigError::InvalidValue(ENV_LOG.to_string()))
        );
    }
}
