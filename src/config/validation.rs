//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::app_config::{AppConfig, SessionBackend, SessionConfig, TokenConfig, TokenPolicyKind};
use crate::shared::error::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

/// RFC 6265 cookie-name token characters
static COOKIE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+\-.^_`|~]+$").expect("cookie name pattern is valid")
});

/// Secrets shipped as examples start with this and must never sign anything
const PLACEHOLDER_SECRET_PREFIX: &str = "change-me";

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> AppResult<()> {
        Self::validate_session_config(&config.session)?;
        Self::validate_token_config(&config.token)?;

        Ok(())
    }

    /// Whether `name` can be used as a cookie name
    pub fn is_valid_session_name(name: &str) -> bool {
        COOKIE_NAME.is_match(name)
    }

    /// Whether `secret` is a published placeholder rather than real key material
    pub fn is_placeholder_secret(secret: &str) -> bool {
        secret
            .trim()
            .get(..PLACEHOLDER_SECRET_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(PLACEHOLDER_SECRET_PREFIX))
    }

    /// Validate session configuration
    fn validate_session_config(session: &SessionConfig) -> AppResult<()> {
        if !Self::is_valid_session_name(&session.name) {
            return Err(AppError::Validation(
                format!("Invalid session name: {:?}", session.name)
            ));
        }

        if Self::is_placeholder_secret(&session.secret_key) {
            return Err(AppError::Validation(
                "session.secret_key is a placeholder; set DASHBOARD__SESSION__SECRET_KEY".to_string()
            ));
        }

        if session.backend == SessionBackend::Server && session.redis_url.is_none() {
            tracing::warn!("Server-side sessions without redis_url are kept in process memory only");
        }

        if !session.secure_cookies {
            tracing::warn!("Session cookies are not marked Secure - only use this for local development");
        }

        Ok(())
    }

    /// Validate token configuration
    fn validate_token_config(token: &TokenConfig) -> AppResult<()> {
        if token.policy == TokenPolicyKind::Jwt && token.jwt.is_none() {
            return Err(AppError::Validation(
                "Token policy 'jwt' requires a [token.jwt] section".to_string()
            ));
        }

        if token.jwt.as_ref().is_some_and(|jwt| Self::is_placeholder_secret(&jwt.secret_key)) {
            return Err(AppError::Validation(
                "token.jwt.secret_key is a placeholder; set DASHBOARD__TOKEN__JWT__SECRET_KEY".to_string()
            ));
        }

        Ok(())
    }
}
