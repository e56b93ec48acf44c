//! HTTP handlers module
//!
//! This module contains all HTTP request handlers.

pub mod auth_status;
pub mod health;

pub use auth_status::handle_auth_status_request;
pub use health::handle_health_request;
