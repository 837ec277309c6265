//! # Structured Logging Module
//!
//! Environment-aware `tracing` setup for test runs and tools that use the
//! registry. Safe to call repeatedly and alongside an existing subscriber.

use crate::config::RegistryConfig;
use crate::error::{ComparerError, ComparerResult};
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging configured from the environment
pub fn init_structured_logging() {
    let (config, rejected) = config_or_default(RegistryConfig::from_env());
    init_with_config(&config);

    // Reported after init so the warning reaches the installed subscriber
    if let Some(e) = rejected {
        tracing::warn!(error = %e, "Invalid logging configuration, using defaults");
    }
}

/// Fall back to the default configuration, keeping the rejected error
fn config_or_default(
    result: ComparerResult<RegistryConfig>,
) -> (RegistryConfig, Option<ComparerError>) {
    match result {
        Ok(config) => (config, None),
        Err(e) => (RegistryConfig::default(), Some(e)),
    }
}

/// Initialize structured logging with an explicit configuration
pub fn init_with_config(config: &RegistryConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

        let console = if config.json_logs {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(false)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_test_writer()
                .with_filter(filter)
                .boxed()
        };

        // Another global subscriber may already be installed by the host
        if tracing_subscriber::registry().with(console).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
        }

        tracing::info!(
            environment = %config.environment,
            log_level = %config.log_level,
            json = config.json_logs,
            "Structured logging initialized"
        );
    });
}
