//! HTTP utilities - Filters injecting shared state into routes

use crate::application::use_cases::AuthStatusUseCase;
use crate::config::AppConfig;
use std::sync::Arc;
use warp::Filter;

/// Helper function to inject auth status use case into route
pub fn with_auth_status_use_case(
    auth_status_use_case: Arc<AuthStatusUseCase>,
) -> impl Filter<Extract = (Arc<AuthStatusUseCase>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || auth_status_use_case.clone())
}

/// Helper function to inject configuration into route
pub fn with_config(
    config: AppConfig,
) -> impl Filter<Extract = (AppConfig,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || config.clone())
}
