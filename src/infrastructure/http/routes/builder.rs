//! Route builder module
//!
//! This module contains the main route builder that orchestrates the creation
//! of all application routes.

use crate::{
    application::use_cases::AuthStatusUseCase,
    config::AppConfig,
    infrastructure::http::{
        responses::handle_rejection,
        routes::{AuthStatusRoutes, HealthRoutes},
    },
};
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes
    pub fn build_routes(
        config: AppConfig,
        auth_status_use_case: Arc<AuthStatusUseCase>,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
        let health_route = HealthRoutes::create_health_route(config);
        let auth_status_route = AuthStatusRoutes::create_auth_status_route(auth_status_use_case);

        auth_status_route
            .or(health_route)
            .recover(handle_rejection)
    }
}
