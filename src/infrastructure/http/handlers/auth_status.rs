//! Auth status handler module
//!
//! Reports whether the caller's session holds a valid token.

use crate::application::use_cases::AuthStatusUseCase;
use crate::infrastructure::http::responses::ResponseFormatter;
use std::sync::Arc;
use tracing::info;
use warp::http::HeaderMap;
use warp::reply::Response;

/// Handle auth status requests
pub async fn handle_auth_status_request(
    headers: HeaderMap,
    auth_status_use_case: Arc<AuthStatusUseCase>,
) -> Result<Response, warp::Rejection> {
    let outcome = auth_status_use_case.execute(&headers).await;
    info!(status = %outcome.status, "Auth status checked");

    Ok(ResponseFormatter::auth_status(outcome))
}
