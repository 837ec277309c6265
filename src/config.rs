//! # Configuration
//!
//! Environment-driven settings for the registry and for structured logging.
//!
//! | Variable                      | Meaning                                   | Default       |
//! |-------------------------------|-------------------------------------------|---------------|
//! | `COMPARER_ENV` / `APP_ENV`    | environment name                          | `development` |
//! | `COMPARER_LOG_LEVEL`          | log filter, overrides the per-env default | per env       |
//! | `COMPARER_LOG_JSON`           | emit JSON log lines                       | `false`       |
//! | `COMPARER_WARN_ON_OVERWRITE`  | warn when a registration is replaced      | `true`        |

use crate::error::{ComparerError, ComparerResult};

pub const ENV_VAR: &str = "COMPARER_ENV";
pub const LOG_LEVEL_VAR: &str = "COMPARER_LOG_LEVEL";
pub const LOG_JSON_VAR: &str = "COMPARER_LOG_JSON";
pub const WARN_ON_OVERWRITE_VAR: &str = "COMPARER_WARN_ON_OVERWRITE";

#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    pub environment: String,
    pub log_level: String,
    pub json_logs: bool,
    pub warn_on_overwrite: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: default_log_level("development").to_string(),
            json_logs: false,
            warn_on_overwrite: true,
        }
    }
}

impl RegistryConfig {
    pub fn from_env() -> ComparerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> ComparerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup(ENV_VAR)
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let log_level = lookup(LOG_LEVEL_VAR)
            .unwrap_or_else(|| default_log_level(&environment).to_string());

        let json_logs = match lookup(LOG_JSON_VAR) {
            Some(raw) => parse_bool(LOG_JSON_VAR, &raw)?,
            None => false,
        };

        let warn_on_overwrite = match lookup(WARN_ON_OVERWRITE_VAR) {
            Some(raw) => parse_bool(WARN_ON_OVERWRITE_VAR, &raw)?,
            None => true,
        };

        Ok(Self {
            environment,
            log_level,
            json_logs,
            warn_on_overwrite,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn default_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

fn parse_bool(key: &str, raw: &str) -> ComparerResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ComparerError::ConfigurationError(format!(
            "Invalid boolean for {key}: {other}"
        ))),
    }
}
