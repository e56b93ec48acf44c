//! Health routes module

use crate::{
    config::AppConfig,
    infrastructure::http::{handlers::handle_health_request, utils::with_config},
};
use warp::Filter;

/// Health routes configuration
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check endpoint route
    pub fn create_health_route(
        config: AppConfig,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        warp::path("health")
            .and(warp::path::end())
            .and(warp::get())
            .and(with_config(config))
            .and_then(handle_health_request)
    }
}
