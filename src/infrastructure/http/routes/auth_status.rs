//! Auth status routes module

use crate::{
    application::use_cases::AuthStatusUseCase,
    infrastructure::http::{handlers::handle_auth_status_request, utils::with_auth_status_use_case},
};
use std::sync::Arc;
use warp::Filter;

/// Auth status routes configuration
pub struct AuthStatusRoutes;

impl AuthStatusRoutes {
    /// `GET /v2/authstatus`
    pub fn create_auth_status_route(
        auth_status_use_case: Arc<AuthStatusUseCase>,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        warp::path!("v2" / "authstatus")
            .and(warp::get())
            .and(warp::header::headers_cloned())
            .and(with_auth_status_use_case(auth_status_use_case))
            .and_then(handle_auth_status_request)
    }
}
