//! Dashboard Auth - session-backed token validation for the cloud.gov dashboard
//!
//! This library finds the OAuth2 token in a caller's session and hands it out
//! only when it passes the configured validity policy. A small HTTP surface
//! reports the result to the dashboard frontend.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use application::{get_valid_token, Settings};
pub use config::AppConfig;
pub use domain::{Session, SessionStore, Token, TokenPolicy};
pub use infrastructure::http::HttpServer;
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
