//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use validator::Validate;

use crate::shared::error::{AppError, AppResult};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Server address to bind to
    pub bind_address: IpAddr,

    /// Server port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,
}

/// Where session payloads live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// Signed payload carried in the cookie itself
    Cookie,
    /// Session id in the cookie, payload in Redis (or memory)
    Server,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionConfig {
    /// Session (cookie) name
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    /// Storage backend
    pub backend: SessionBackend,

    /// Key material for cookie signing
    #[validate(length(min = 32))]
    pub secret_key: String,

    /// Cookie and server-side TTL in seconds
    #[validate(range(min = 60, max = 2592000))] // 1 minute to 30 days
    pub max_age_seconds: u64,

    /// Mark cookies `Secure`
    pub secure_cookies: bool,

    /// Redis connection URL for the server backend
    #[validate(url)]
    pub redis_url: Option<String>,
}

/// Which validity rule tokens must pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPolicyKind {
    Expiry,
    Jwt,
}

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JwtConfig {
    /// JWT secret key
    #[validate(length(min = 32))]
    pub secret_key: String,

    /// JWT issuer
    #[validate(length(min = 1))]
    pub issuer: String,

    /// JWT audience
    #[validate(length(min = 1))]
    pub audience: String,
}

/// Token validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TokenConfig {
    pub policy: TokenPolicyKind,

    /// Tokens count as expired this long before their expiry instant
    #[validate(range(max = 3600))]
    pub expiry_delta_seconds: u64,

    #[validate(nested)]
    pub jwt: Option<JwtConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (json, text)
    #[validate(length(min = 1))]
    pub format: String,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Session configuration
    pub session: SessionConfig,

    /// Token validation configuration
    pub token: TokenConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            backend: SessionBackend::Cookie,
            secret_key: "change-me-dashboard-session-secret-key-32+".to_string(),
            max_age_seconds: 3600 * 8,
            secure_cookies: true,
            redis_url: None,
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            policy: TokenPolicyKind::Expiry,
            expiry_delta_seconds: 10,
            jwt: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: 8080,
            },
            session: SessionConfig::default(),
            token: TokenConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("Conf").required(false))
            .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config.try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_config()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;

        crate::config::ConfigValidator::validate_config(&config)?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.server.validate()?;
        self.session.validate()?;
        self.token.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}
