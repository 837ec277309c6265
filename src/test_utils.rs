//! # Test Utilities
//!
//! Helpers for test suites that use comparers. Each test that registers
//! comparers should build its own registry so registrations do not leak
//! between concurrently running tests.

use crate::config::RegistryConfig;
use crate::logging;
use crate::registry::ComparerRegistry;
use std::sync::Arc;

/// Configuration used by [`isolated_registry`]
pub fn test_config() -> RegistryConfig {
    RegistryConfig {
        environment: "test".to_string(),
        log_level: "debug".to_string(),
        json_logs: false,
        warn_on_overwrite: false,
    }
}

/// Fresh, empty registry for a single test
pub fn isolated_registry() -> Arc<ComparerRegistry> {
    Arc::new(ComparerRegistry::with_config(test_config()))
}

/// Install test logging once per process
pub fn setup_test_logging() {
    logging::init_with_config(&test_config());
}
