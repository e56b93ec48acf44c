//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use crate::config::app_config::LoggingConfig;
use crate::shared::error::{AppError, AppResult};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    pub fn initialize(config: &LoggingConfig) -> AppResult<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = if config.format == "json" {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Short, non-reversible identifier for a credential.
    pub fn fingerprint(secret: &str) -> String {
        let digest = Sha256::digest(secret.as_bytes());
        hex::encode(&digest[..6])
    }

    /// Log why a request ended up without a valid token
    pub fn log_token_rejected(session_name: &str, reason: &str) {
        debug!(
            session_name = %session_name,
            reason = %reason,
            "No valid token for request"
        );
    }

    /// Log a session that failed integrity or decoding checks
    pub fn log_session_tampered(session_name: &str, details: &str) {
        warn!(
            session_name = %session_name,
            details = %details,
            "Session rejected at store boundary"
        );
    }
}
