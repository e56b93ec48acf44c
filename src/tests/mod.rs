//! Test suite for the dashboard auth crate
//!
//! - Unit tests for the token lookup scenarios
//! - Integration tests for the HTTP endpoints
//! - Mock session store and fixture utilities

pub mod common;
pub mod integration;
pub mod unit;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();

        config.server.port = 18080;
        config.session.secure_cookies = false;
        config.session.secret_key = "integration-test-secret-key-with-32-chars".to_string();

        config
    }
}

/// Test result types
pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_initialization() {
        config::init();
        let test_config = config::test_config();
        assert!(!test_config.session.secure_cookies);
        assert!(test_config.validate_config().is_ok());
    }
}
