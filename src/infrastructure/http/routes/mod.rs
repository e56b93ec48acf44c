//! HTTP routes module
//!
//! This module contains all HTTP route configurations.

pub mod auth_status;
pub mod builder;
pub mod health;

pub use auth_status::AuthStatusRoutes;
pub use builder::RouteBuilder;
pub use health::HealthRoutes;
